//! Flat circular caps.

use glam::Vec3;
use revolve_core::{
    Lattice, LatticeRole, Result, RevolveError, SurfaceEquation, SurfaceSampler, SurfaceVertex,
    Winding, Wrap,
};

/// A disc of radius `radius` in the plane `z = height`.
///
/// Rings run from the center (`u = 0`) to the rim (`u = 1`); the normal is
/// the constant axial direction `facing`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    radius: f32,
    height: f32,
    facing: Vec3,
}

impl Disc {
    /// A disc whose normal points along +z.
    pub fn facing_up(radius: f32, height: f32) -> Result<Self> {
        Self::new(radius, height, Vec3::Z)
    }

    /// A disc whose normal points along -z.
    pub fn facing_down(radius: f32, height: f32) -> Result<Self> {
        Self::new(radius, height, Vec3::NEG_Z)
    }

    fn new(radius: f32, height: f32, facing: Vec3) -> Result<Self> {
        RevolveError::require_positive("disc radius", radius)?;
        if !height.is_finite() {
            return Err(RevolveError::InvalidParameter {
                name: "disc height",
                value: height,
                reason: "must be finite",
            });
        }
        Ok(Self {
            radius,
            height,
            facing,
        })
    }

    /// Samples the disc as a lattice with the given role.
    ///
    /// The parameter directions of a disc face -z, so a disc facing up keeps
    /// the forward winding and one facing down is reversed.
    pub fn sample(&self, sampler: &SurfaceSampler, role: LatticeRole) -> Lattice {
        let winding = if self.facing.z < 0.0 {
            Winding::Reversed
        } else {
            Winding::Forward
        };
        sampler
            .generate(self, role, Wrap::Clamped)
            .with_winding(winding)
    }
}

impl SurfaceEquation for Disc {
    fn evaluate(&self, theta: f32, u: f32) -> SurfaceVertex {
        let (sin, cos) = theta.sin_cos();
        let r = u * self.radius;
        SurfaceVertex::new(
            Vec3::new(r * cos, r * sin, self.height),
            self.facing,
            self.facing,
        )
    }
}
