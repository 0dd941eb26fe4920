//! Cylinder: a straight side with a top and bottom disc.

use glam::Vec3;
use revolve_core::{
    Lattice, LatticeRole, Resolution, Result, RevolveError, SurfaceEquation, SurfaceSampler,
    SurfaceVertex, Winding, Wrap,
};
use serde::{Deserialize, Serialize};

use crate::disc::Disc;

/// A right circular cylinder centered on the origin along z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    /// Radius of the side and caps.
    pub radius: f32,
    /// Distance between the caps.
    pub height: f32,
}

impl Cylinder {
    /// Creates a cylinder, rejecting non-positive dimensions.
    pub fn new(radius: f32, height: f32) -> Result<Self> {
        let cylinder = Self { radius, height };
        cylinder.validate()?;
        Ok(cylinder)
    }

    /// Checks the dimensions.
    pub fn validate(&self) -> Result<()> {
        RevolveError::require_positive("cylinder radius", self.radius)?;
        RevolveError::require_positive("cylinder height", self.height)?;
        Ok(())
    }

    /// Samples the side with `side` and both caps with `disc`.
    ///
    /// Lattices are returned as side, top, bottom.
    pub fn lattices(&self, side: Resolution, disc: Resolution) -> Result<Vec<Lattice>> {
        self.validate()?;
        let side_sampler = SurfaceSampler::with_resolution(side)?;
        let disc_sampler = SurfaceSampler::with_resolution(disc)?;
        let half = self.height / 2.0;
        Ok(vec![
            // d/di x d/dj points away from the axis on the side.
            side_sampler
                .generate(self, LatticeRole::Side, Wrap::Clamped)
                .with_winding(Winding::Reversed),
            Disc::facing_up(self.radius, half)?.sample(&disc_sampler, LatticeRole::Top),
            Disc::facing_down(self.radius, -half)?.sample(&disc_sampler, LatticeRole::Bottom),
        ])
    }
}

impl SurfaceEquation for Cylinder {
    fn evaluate(&self, theta: f32, u: f32) -> SurfaceVertex {
        let (sin, cos) = theta.sin_cos();
        let t = u * self.height;
        let position = Vec3::new(self.radius * cos, self.radius * sin, t - self.height / 2.0);
        SurfaceVertex::new(position, Vec3::new(cos, sin, 0.0), Vec3::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_has_constant_radius() {
        let cylinder = Cylinder::new(0.5, 1.0).unwrap();
        let lattices = cylinder
            .lattices(
                Resolution::new(100, 100).unwrap(),
                Resolution::new(100, 50).unwrap(),
            )
            .unwrap();
        assert_eq!(lattices.len(), 3);

        let side = &lattices[0];
        assert_eq!(side.len(), 100 * 100);
        for v in side.vertices() {
            let p = v.position;
            assert!((p.x * p.x + p.y * p.y - 0.25).abs() < 1e-5);
            assert!(p.z >= -0.5 - 1e-6 && p.z <= 0.5 + 1e-6);
        }
    }

    #[test]
    fn test_caps() {
        let cylinder = Cylinder::new(0.5, 1.0).unwrap();
        let lattices = cylinder
            .lattices(
                Resolution::new(12, 6).unwrap(),
                Resolution::new(12, 4).unwrap(),
            )
            .unwrap();
        let (top, bottom) = (&lattices[1], &lattices[2]);
        assert_eq!(top.role(), LatticeRole::Top);
        assert_eq!(bottom.role(), LatticeRole::Bottom);
        assert_eq!(top.rings(), 4);
        assert!(top.vertices().all(|v| v.position.z == 0.5 && v.normal == Vec3::Z));
        assert!(bottom
            .vertices()
            .all(|v| v.position.z == -0.5 && v.normal == Vec3::NEG_Z));
    }

    #[test]
    fn test_invalid_cylinder() {
        assert!(Cylinder::new(-0.5, 1.0).is_err());
        assert!(Cylinder::new(0.5, f32::NAN).is_err());
    }
}
