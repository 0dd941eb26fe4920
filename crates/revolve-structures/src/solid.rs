//! Solids of revolution as drawable structures.

use std::any::Any;

use revolve_core::{Lattice, Options, Result, Structure, SurfaceStyle, Vec3};
use serde::{Deserialize, Serialize};

use crate::{Cone, Cylinder, Sphere, Torus};

/// One of the supported solids, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Solid {
    /// Cone: side and base.
    Cone(Cone),
    /// Cylinder: side, top and bottom.
    Cylinder(Cylinder),
    /// Sphere: one closed surface.
    Sphere(Sphere),
    /// Torus: one closed surface.
    Torus(Torus),
}

impl Solid {
    /// Type name used by the registry.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Cone(_) => "Cone",
            Self::Cylinder(_) => "Cylinder",
            Self::Sphere(_) => "Sphere",
            Self::Torus(_) => "Torus",
        }
    }

    /// Checks the solid's parameters.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Cone(cone) => cone.validate(),
            Self::Cylinder(cylinder) => cylinder.validate(),
            Self::Sphere(sphere) => sphere.validate(),
            Self::Torus(torus) => torus.validate(),
        }
    }

    /// Samples every lattice the solid needs at the resolutions in `options`.
    pub fn lattices(&self, options: &Options) -> Result<Vec<Lattice>> {
        let side = options.side_resolution();
        let disc = options.disc_resolution();
        match self {
            Self::Cone(cone) => cone.lattices(side, disc),
            Self::Cylinder(cylinder) => cylinder.lattices(side, disc),
            Self::Sphere(sphere) => sphere.lattices(side),
            Self::Torus(torus) => torus.lattices(side),
        }
    }
}

impl From<Cone> for Solid {
    fn from(cone: Cone) -> Self {
        Self::Cone(cone)
    }
}

impl From<Cylinder> for Solid {
    fn from(cylinder: Cylinder) -> Self {
        Self::Cylinder(cylinder)
    }
}

impl From<Sphere> for Solid {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}

impl From<Torus> for Solid {
    fn from(torus: Torus) -> Self {
        Self::Torus(torus)
    }
}

/// A solid whose lattices were sampled once, ready to be walked every frame.
pub struct SolidStructure {
    name: String,
    solid: Solid,
    lattices: Vec<Lattice>,
    style: SurfaceStyle,
    enabled: bool,
}

impl SolidStructure {
    /// Samples `solid` using the resolutions and default style in `options`.
    pub fn new(name: impl Into<String>, solid: impl Into<Solid>, options: &Options) -> Result<Self> {
        let name = name.into();
        let solid = solid.into();
        let lattices = solid.lattices(options)?;
        log::info!(
            "generated {} '{name}': {} lattices, {} points",
            solid.type_name(),
            lattices.len(),
            lattices.iter().map(Lattice::len).sum::<usize>()
        );
        Ok(Self {
            name,
            solid,
            lattices,
            style: SurfaceStyle {
                material: options.material.clone(),
                color: options.surface_color,
            },
            enabled: true,
        })
    }

    /// Replaces the material name.
    #[must_use]
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.style.material = material.into();
        self
    }

    /// Replaces the surface color.
    #[must_use]
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.style.color = color;
        self
    }

    /// The solid and its parameters.
    pub fn solid(&self) -> &Solid {
        &self.solid
    }

    /// Sets the surface color.
    pub fn set_color(&mut self, color: Vec3) {
        self.style.color = color;
    }

    /// Sets the material name.
    pub fn set_material(&mut self, material: impl Into<String>) {
        self.style.material = material.into();
    }
}

impl Structure for SolidStructure {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        self.solid.type_name()
    }

    fn lattices(&self) -> &[Lattice] {
        &self.lattices
    }

    fn style(&self) -> &SurfaceStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut SurfaceStyle {
        &mut self.style
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
