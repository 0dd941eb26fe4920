//! Torus around the z axis.

use std::f32::consts::TAU;

use glam::Vec3;
use revolve_core::{
    Lattice, LatticeRole, Resolution, Result, RevolveError, SurfaceEquation, SurfaceSampler,
    SurfaceVertex, Wrap,
};
use serde::{Deserialize, Serialize};

/// A torus whose tube center circle has radius `radius` in the xy plane.
///
/// Meridians run clockwise seen from +z. The tube angle spans a full turn,
/// so the last ring coincides with the first; the ring axis is still walked
/// as clamped and the coincident rings close the tube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Torus {
    /// Distance from the z axis to the tube center.
    pub radius: f32,
    /// Tube radius.
    pub tube_radius: f32,
}

impl Torus {
    /// Creates a torus, rejecting non-positive radii.
    pub fn new(radius: f32, tube_radius: f32) -> Result<Self> {
        let torus = Self {
            radius,
            tube_radius,
        };
        torus.validate()?;
        Ok(torus)
    }

    /// Checks the radii.
    pub fn validate(&self) -> Result<()> {
        RevolveError::require_positive("torus radius", self.radius)?;
        RevolveError::require_positive("torus tube radius", self.tube_radius)?;
        Ok(())
    }

    /// Samples the whole surface.
    pub fn lattices(&self, resolution: Resolution) -> Result<Vec<Lattice>> {
        self.validate()?;
        let sampler = SurfaceSampler::with_resolution(resolution)?;
        Ok(vec![sampler.generate(self, LatticeRole::Surface, Wrap::Clamped)])
    }
}

impl SurfaceEquation for Torus {
    fn evaluate(&self, theta: f32, u: f32) -> SurfaceVertex {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = (u * TAU).sin_cos();
        let ring = self.radius + self.tube_radius * cos_phi;
        let position = Vec3::new(cos_theta * ring, -sin_theta * ring, self.tube_radius * sin_phi);
        // Away from the tube center circle.
        let normal = Vec3::new(cos_theta * cos_phi, -sin_theta * cos_phi, sin_phi);
        SurfaceVertex::new(position, normal, Vec3::Z)
    }
}
