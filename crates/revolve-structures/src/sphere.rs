//! Sphere sampled pole to pole.

use std::f32::consts::PI;

use glam::Vec3;
use revolve_core::{
    Lattice, LatticeRole, Resolution, Result, RevolveError, SurfaceEquation, SurfaceSampler,
    SurfaceVertex, Wrap,
};
use serde::{Deserialize, Serialize};

/// A sphere centered on the origin.
///
/// Ring 0 is the north pole (`phi = 0`), the last ring the south pole
/// (`phi = pi`). Every meridian passes through both poles, so the first and
/// last ring rows emit zero-area triangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Sphere radius.
    pub radius: f32,
}

impl Sphere {
    /// Creates a sphere, rejecting non-positive radii.
    pub fn new(radius: f32) -> Result<Self> {
        let sphere = Self { radius };
        sphere.validate()?;
        Ok(sphere)
    }

    /// Checks the radius.
    pub fn validate(&self) -> Result<()> {
        RevolveError::require_positive("sphere radius", self.radius)?;
        Ok(())
    }

    /// Samples the whole surface.
    pub fn lattices(&self, resolution: Resolution) -> Result<Vec<Lattice>> {
        self.validate()?;
        let sampler = SurfaceSampler::with_resolution(resolution)?;
        Ok(vec![sampler.generate(self, LatticeRole::Surface, Wrap::Clamped)])
    }
}

impl SurfaceEquation for Sphere {
    fn evaluate(&self, theta: f32, u: f32) -> SurfaceVertex {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = (u * PI).sin_cos();
        let normal = Vec3::new(cos_theta * sin_phi, sin_theta * sin_phi, cos_phi);
        SurfaceVertex::new(self.radius * normal, normal, Vec3::Z)
    }
}
