//! Parametric surface sampling.
//!
//! A [`SurfaceSampler`] evaluates a [`SurfaceEquation`] on a regular
//! `meridians x rings` grid: the meridian angle is `theta_i = i * 2pi / M`
//! and the ring parameter is normalized to `u_j = j / (N - 1)`, so the first
//! and last rings land exactly on the ends of the parameter range.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RevolveError};
use crate::lattice::{Lattice, LatticeRole, SurfaceVertex, Wrap};

/// Smallest meridian count that still encloses an area.
pub const MIN_MERIDIANS: usize = 3;

/// Smallest ring count; one ring would divide by `N - 1 = 0`.
pub const MIN_RINGS: usize = 2;

/// A closed-form surface of revolution.
pub trait SurfaceEquation {
    /// Evaluates the surface at meridian angle `theta` (radians, `[0, 2pi)`)
    /// and normalized ring parameter `u` (`[0, 1]`).
    fn evaluate(&self, theta: f32, u: f32) -> SurfaceVertex;
}

impl<F> SurfaceEquation for F
where
    F: Fn(f32, f32) -> SurfaceVertex,
{
    fn evaluate(&self, theta: f32, u: f32) -> SurfaceVertex {
        self(theta, u)
    }
}

/// Subdivision counts for one lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Number of meridians (`M`).
    pub meridians: usize,
    /// Number of rings (`N`).
    pub rings: usize,
}

impl Resolution {
    /// Creates a resolution, rejecting counts below `3 x 2`.
    pub fn new(meridians: usize, rings: usize) -> Result<Self> {
        let resolution = Self { meridians, rings };
        resolution.validate()?;
        Ok(resolution)
    }

    /// Checks the counts; deserialized values bypass [`Resolution::new`].
    pub fn validate(&self) -> Result<()> {
        if self.meridians < MIN_MERIDIANS || self.rings < MIN_RINGS {
            return Err(RevolveError::InvalidResolution {
                meridians: self.meridians,
                rings: self.rings,
            });
        }
        Ok(())
    }

    /// Number of points in a lattice of this resolution.
    pub fn points(&self) -> usize {
        self.meridians * self.rings
    }
}

/// Generates lattices for a fixed resolution.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceSampler {
    resolution: Resolution,
}

impl SurfaceSampler {
    /// Creates a sampler for `meridians x rings` lattices.
    pub fn new(meridians: usize, rings: usize) -> Result<Self> {
        Ok(Self {
            resolution: Resolution::new(meridians, rings)?,
        })
    }

    /// Creates a sampler from an existing resolution.
    pub fn with_resolution(resolution: Resolution) -> Result<Self> {
        resolution.validate()?;
        Ok(Self { resolution })
    }

    /// Returns the sampler's resolution.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Meridian angle of index `i`.
    pub fn theta(&self, i: usize) -> f32 {
        i as f32 * (TAU / self.resolution.meridians as f32)
    }

    /// Normalized ring parameter of index `j`.
    pub fn u(&self, j: usize) -> f32 {
        j as f32 / (self.resolution.rings - 1) as f32
    }

    /// Samples `equation` over the full grid.
    ///
    /// Pure and deterministic: the same equation and resolution always give
    /// the same lattice.
    pub fn generate<E>(&self, equation: &E, role: LatticeRole, ring_wrap: Wrap) -> Lattice
    where
        E: SurfaceEquation + ?Sized,
    {
        let Resolution { meridians, rings } = self.resolution;
        let mut vertices = Vec::with_capacity(self.resolution.points());
        for i in 0..meridians {
            let theta = self.theta(i);
            for j in 0..rings {
                vertices.push(equation.evaluate(theta, self.u(j)));
            }
        }

        log::trace!(
            "sampled {} lattice: {meridians} x {rings} points",
            role.as_str()
        );
        Lattice::from_vertices(role, meridians, rings, ring_wrap, vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn unit_circle(theta: f32, u: f32) -> SurfaceVertex {
        let (sin, cos) = theta.sin_cos();
        SurfaceVertex::new(Vec3::new(cos, sin, u), Vec3::new(cos, sin, 0.0), Vec3::X)
    }

    #[test]
    fn test_resolution_limits() {
        assert!(Resolution::new(3, 2).is_ok());
        assert!(Resolution::new(2, 10).is_err());
        assert!(Resolution::new(10, 1).is_err());
        assert!(Resolution::new(0, 0).is_err());
        assert!(SurfaceSampler::new(100, 1).is_err());
    }

    #[test]
    fn test_generate_dimensions() {
        let sampler = SurfaceSampler::new(12, 5).unwrap();
        let lattice = sampler.generate(&unit_circle, LatticeRole::Side, Wrap::Clamped);
        assert_eq!(lattice.meridians(), 12);
        assert_eq!(lattice.rings(), 5);
        assert_eq!(lattice.len(), 60);
        assert_eq!(lattice.ring_wrap(), Wrap::Clamped);
        assert_eq!(lattice.meridian_wrap(), Wrap::Cyclic);
        assert!(lattice.vertices().all(SurfaceVertex::is_finite));
    }

    #[test]
    fn test_parameter_ends() {
        let sampler = SurfaceSampler::new(8, 4).unwrap();
        assert_eq!(sampler.u(0), 0.0);
        assert_eq!(sampler.u(3), 1.0);
        assert_eq!(sampler.theta(0), 0.0);
        assert!((sampler.theta(4) - std::f32::consts::PI).abs() < 1e-6);

        let lattice = sampler.generate(&unit_circle, LatticeRole::Side, Wrap::Clamped);
        assert_eq!(lattice.point(0, 0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(lattice.point(0, 3).z, 1.0);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let sampler = SurfaceSampler::new(16, 9).unwrap();
        let a = sampler.generate(&unit_circle, LatticeRole::Surface, Wrap::Clamped);
        let b = sampler.generate(&unit_circle, LatticeRole::Surface, Wrap::Clamped);
        assert!(a.vertices().zip(b.vertices()).all(|(x, y)| x == y));
    }

    #[test]
    fn test_bounding_box() {
        let sampler = SurfaceSampler::new(4, 2).unwrap();
        let lattice = sampler.generate(&unit_circle, LatticeRole::Side, Wrap::Clamped);
        let (min, max) = lattice.bounding_box().unwrap();
        assert!((min - Vec3::new(-1.0, -1.0, 0.0)).length() < 1e-6);
        assert!((max - Vec3::new(1.0, 1.0, 1.0)).length() < 1e-6);
    }
}
