//! Material system for surface rendering.
//!
//! Materials describe how a surface is shaded: a fixed ambient/diffuse/
//! specular response shared by the whole surface. The surface color itself
//! travels with the [`SurfaceStyle`](revolve_core::SurfaceStyle).

use std::collections::HashMap;

use revolve_core::{Result, RevolveError};

/// A material definition for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material name.
    pub name: String,
    /// Ambient light factor (0.0 - 1.0).
    pub ambient: f32,
    /// Diffuse reflection factor (0.0 - 1.0).
    pub diffuse: f32,
    /// Specular reflection intensity (0.0 - 1.0).
    pub specular: f32,
    /// Specular shininess/exponent (higher = sharper highlights).
    pub shininess: f32,
    /// Opacity (1.0 = opaque).
    pub alpha: f32,
}

impl Material {
    /// Creates an opaque material with custom properties.
    pub fn new(
        name: impl Into<String>,
        ambient: f32,
        diffuse: f32,
        specular: f32,
        shininess: f32,
    ) -> Self {
        Self {
            name: name.into(),
            ambient,
            diffuse,
            specular,
            shininess,
            alpha: 1.0,
        }
    }

    /// Creates a flat (unlit) material.
    pub fn flat(name: impl Into<String>) -> Self {
        Self::new(name, 1.0, 0.0, 0.0, 1.0)
    }

    /// Creates the "plastic" material - strong specular, wide highlight. Default.
    #[must_use]
    pub fn plastic() -> Self {
        Self::new("plastic", 0.2, 0.6, 0.9, 1.0)
    }

    /// Creates the "clay" material - matte, minimal specularity.
    #[must_use]
    pub fn clay() -> Self {
        Self::new("clay", 0.25, 0.75, 0.1, 8.0)
    }

    /// Creates the "wax" material - slightly glossy, soft highlights.
    #[must_use]
    pub fn wax() -> Self {
        Self::new("wax", 0.2, 0.7, 0.4, 16.0)
    }

    /// Creates the "candy" material - shiny, bright highlights.
    #[must_use]
    pub fn candy() -> Self {
        Self::new("candy", 0.15, 0.6, 0.7, 64.0)
    }

    /// Creates the "ceramic" material - smooth, moderate gloss.
    #[must_use]
    pub fn ceramic() -> Self {
        Self::new("ceramic", 0.2, 0.65, 0.5, 32.0)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::plastic()
    }
}

/// GPU-compatible material uniforms.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniforms {
    /// Ambient factor.
    pub ambient: f32,
    /// Diffuse factor.
    pub diffuse: f32,
    /// Specular intensity.
    pub specular: f32,
    /// Shininess exponent.
    pub shininess: f32,
}

impl From<&Material> for MaterialUniforms {
    fn from(mat: &Material) -> Self {
        Self {
            ambient: mat.ambient,
            diffuse: mat.diffuse,
            specular: mat.specular,
            shininess: mat.shininess,
        }
    }
}

impl Default for MaterialUniforms {
    fn default() -> Self {
        Self::from(&Material::default())
    }
}

/// Registry for managing materials.
#[derive(Debug, Clone)]
pub struct MaterialRegistry {
    materials: HashMap<String, Material>,
    fallback: Material,
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialRegistry {
    /// Creates a new material registry with the built-in materials.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            materials: HashMap::new(),
            fallback: Material::plastic(),
        };
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        self.register(Material::plastic());
        self.register(Material::clay());
        self.register(Material::wax());
        self.register(Material::candy());
        self.register(Material::ceramic());
        self.register(Material::flat("flat"));
    }

    /// Registers a material, replacing any material with the same name.
    pub fn register(&mut self, material: Material) {
        self.materials.insert(material.name.clone(), material);
    }

    /// Gets a material by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    /// Gets a material by name, failing if it is not registered.
    pub fn require(&self, name: &str) -> Result<&Material> {
        self.get(name)
            .ok_or_else(|| RevolveError::MaterialNotFound(name.to_string()))
    }

    /// Gets a material by name, falling back to "plastic".
    #[must_use]
    pub fn resolve(&self, name: &str) -> &Material {
        self.get(name).unwrap_or(&self.fallback)
    }

    /// Returns true if a material with the given name is registered.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.materials.contains_key(name)
    }

    /// Returns all registered material names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.materials.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material_constants() {
        let mat = Material::default();
        assert_eq!(mat.name, "plastic");
        assert_eq!(mat.ambient, 0.2);
        assert_eq!(mat.diffuse, 0.6);
        assert_eq!(mat.specular, 0.9);
        assert_eq!(mat.shininess, 1.0);
        assert_eq!(mat.alpha, 1.0);
    }

    #[test]
    fn test_registry_lookup() {
        let registry = MaterialRegistry::new();
        assert!(registry.has("plastic"));
        assert!(registry.has("clay"));
        assert!(registry.require("velvet").is_err());
        assert_eq!(registry.resolve("velvet").name, "plastic");
        assert_eq!(registry.names().first(), Some(&"candy"));
    }

    #[test]
    fn test_uniforms_from_material() {
        let uniforms = MaterialUniforms::from(&Material::wax());
        assert_eq!(uniforms.shininess, 16.0);
        assert_eq!(bytemuck::bytes_of(&uniforms).len(), 16);
    }
}
