//! Declarative scene descriptions loaded from JSON.

use std::path::Path;

use glam::Vec3;
use revolve_core::{Context, Result, Structure};
use serde::{Deserialize, Serialize};

use crate::solid::{Solid, SolidStructure};
use crate::{Cone, Cylinder, Sphere, Torus};

/// One named solid in a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidDescription {
    /// Unique structure name.
    pub name: String,

    /// Shape and its parameters.
    #[serde(flatten)]
    pub solid: Solid,

    /// Material override; the context default is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    /// Color override; the context default is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec3>,

    /// Whether the solid is drawn initially.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl SolidDescription {
    /// Describes an enabled solid with the default style.
    pub fn new(name: impl Into<String>, solid: impl Into<Solid>) -> Self {
        Self {
            name: name.into(),
            solid: solid.into(),
            material: None,
            color: None,
            enabled: true,
        }
    }

    /// Builds the structure, sampling with the context's options.
    pub fn build(&self, ctx: &Context) -> Result<SolidStructure> {
        let mut structure = SolidStructure::new(self.name.clone(), self.solid, &ctx.options)?;
        if let Some(material) = &self.material {
            structure.set_material(material.clone());
        }
        if let Some(color) = self.color {
            structure.set_color(color);
        }
        Ok(structure)
    }
}

/// The solids to create at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Solids in registration order.
    pub solids: Vec<SolidDescription>,
}

impl SceneDescription {
    /// Loads a scene from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parses a scene and validates every solid.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let scene: Self = serde_json::from_str(text)?;
        for description in &scene.solids {
            description.solid.validate()?;
        }
        Ok(scene)
    }

    /// The four classic solids: cone, cylinder, sphere and torus.
    pub fn demo() -> Self {
        let solids: [(&str, Solid); 4] = [
            (
                "cone",
                Cone {
                    radius: 1.0,
                    height: 2.0,
                }
                .into(),
            ),
            (
                "cylinder",
                Cylinder {
                    radius: 0.5,
                    height: 1.0,
                }
                .into(),
            ),
            ("sphere", Sphere { radius: 1.0 }.into()),
            (
                "torus",
                Torus {
                    radius: 1.0,
                    tube_radius: 0.5,
                }
                .into(),
            ),
        ];
        Self {
            solids: solids
                .into_iter()
                .map(|(name, solid)| SolidDescription::new(name, solid))
                .collect(),
        }
    }

    /// Samples every solid and registers it in `ctx`.
    ///
    /// Stops at the first failure; solids registered before it stay.
    pub fn register_all(&self, ctx: &mut Context) -> Result<()> {
        for description in &self.solids {
            let mut structure = description.build(ctx)?;
            structure.set_enabled(description.enabled);
            ctx.registry.register(Box::new(structure))?;
        }
        ctx.update_extents();
        log::info!("registered {} solids", self.solids.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use revolve_core::{Options, RevolveError};

    use super::*;

    fn small_context() -> Context {
        Context::new(Options {
            meridians: 10,
            rings: 6,
            disc_rings: 3,
            ..Options::default()
        })
    }

    #[test]
    fn test_demo_scene() {
        let mut ctx = small_context();
        SceneDescription::demo().register_all(&mut ctx).unwrap();
        assert_eq!(ctx.registry.len(), 4);
        assert_eq!(ctx.registry.get("torus").unwrap().type_name(), "Torus");
        assert!(ctx.registry.get_as::<SolidStructure>("cone").is_some());
        // The torus reaches 1.5 from the axis, the cone spans z in [-1, 1].
        let (min, max) = ctx.bounding_box;
        assert!((max.x - 1.5).abs() < 1e-5);
        assert!((min.z + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_parse_scene() {
        let scene = SceneDescription::from_json_str(
            r#"{
                "solids": [
                    { "name": "a", "shape": "sphere", "radius": 2.0, "material": "clay" },
                    { "name": "b", "shape": "cone", "radius": 1.0, "height": 3.0,
                      "color": [0.0, 1.0, 0.0], "enabled": false }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(scene.solids.len(), 2);
        assert_eq!(scene.solids[0].material.as_deref(), Some("clay"));
        assert!(scene.solids[0].enabled);
        assert!(!scene.solids[1].enabled);

        let mut ctx = small_context();
        scene.register_all(&mut ctx).unwrap();
        let a = ctx.registry.get("a").unwrap();
        assert_eq!(a.style().material, "clay");
        let b = ctx.registry.get("b").unwrap();
        assert_eq!(b.style().color, Vec3::Y);
        assert!(!b.is_enabled());
    }

    #[test]
    fn test_invalid_scenes() {
        let negative = r#"{ "solids": [ { "name": "a", "shape": "sphere", "radius": -1.0 } ] }"#;
        assert!(matches!(
            SceneDescription::from_json_str(negative),
            Err(RevolveError::InvalidParameter { .. })
        ));

        let unknown = r#"{ "solids": [ { "name": "a", "shape": "cube", "radius": 1.0 } ] }"#;
        assert!(matches!(
            SceneDescription::from_json_str(unknown),
            Err(RevolveError::ConfigError(_))
        ));
    }

    #[test]
    fn test_duplicate_names() {
        let mut scene = SceneDescription::demo();
        scene.solids.push(SolidDescription::new("sphere", Sphere { radius: 3.0 }));
        let mut ctx = small_context();
        assert!(matches!(
            scene.register_all(&mut ctx),
            Err(RevolveError::StructureExists(_))
        ));
    }
}
