//! Cone: a slanted side closing at an apex, plus a base disc.

use glam::Vec3;
use revolve_core::{
    Lattice, LatticeRole, Resolution, Result, RevolveError, SurfaceEquation, SurfaceSampler,
    SurfaceVertex, Winding, Wrap,
};
use serde::{Deserialize, Serialize};

use crate::disc::Disc;

/// A right circular cone centered on the origin, apex up.
///
/// The base sits at `z = -height / 2`, the apex at `z = height / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cone {
    /// Base radius.
    pub radius: f32,
    /// Height from base to apex.
    pub height: f32,
}

impl Cone {
    /// Creates a cone, rejecting non-positive dimensions.
    pub fn new(radius: f32, height: f32) -> Result<Self> {
        let cone = Self { radius, height };
        cone.validate()?;
        Ok(cone)
    }

    /// Checks the dimensions.
    pub fn validate(&self) -> Result<()> {
        RevolveError::require_positive("cone radius", self.radius)?;
        RevolveError::require_positive("cone height", self.height)?;
        Ok(())
    }

    /// The base disc.
    pub fn base(&self) -> Result<Disc> {
        Disc::facing_down(self.radius, -self.height / 2.0)
    }

    /// Samples the side with `side` and the base with `disc`.
    pub fn lattices(&self, side: Resolution, disc: Resolution) -> Result<Vec<Lattice>> {
        self.validate()?;
        let side_sampler = SurfaceSampler::with_resolution(side)?;
        let disc_sampler = SurfaceSampler::with_resolution(disc)?;
        Ok(vec![
            // d/di x d/dj points away from the axis on the side.
            side_sampler
                .generate(self, LatticeRole::Side, Wrap::Clamped)
                .with_winding(Winding::Reversed),
            self.base()?.sample(&disc_sampler, LatticeRole::Base),
        ])
    }
}

impl SurfaceEquation for Cone {
    /// `t = u * H` climbs from the base to the apex; the ring radius shrinks
    /// linearly as `(H - t) / H * R`.
    fn evaluate(&self, theta: f32, u: f32) -> SurfaceVertex {
        let (sin, cos) = theta.sin_cos();
        let t = u * self.height;
        let scale = (self.height - t) / self.height * self.radius;
        let position = Vec3::new(scale * cos, scale * sin, t - self.height / 2.0);
        // Slant normal, the same along a whole meridian.
        let normal = Vec3::new(self.height * cos, self.height * sin, self.radius);
        SurfaceVertex::new(position, normal, Vec3::Z)
    }
}
