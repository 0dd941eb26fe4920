//! Structure registry for managing registered structures.

use std::collections::BTreeMap;

use crate::error::{Result, RevolveError};
use crate::structure::Structure;

/// Registry of every structure in the scene.
///
/// Structures are keyed by name; iteration follows name order so frames are
/// drawn in a stable order.
#[derive(Default)]
pub struct Registry {
    structures: BTreeMap<String, Box<dyn Structure>>,
}

impl Registry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a structure with the registry.
    ///
    /// Returns an error if a structure with the same name already exists.
    pub fn register(&mut self, structure: Box<dyn Structure>) -> Result<()> {
        let name = structure.name().to_string();
        if self.structures.contains_key(&name) {
            return Err(RevolveError::StructureExists(name));
        }
        log::debug!("registered {} '{name}'", structure.type_name());
        self.structures.insert(name, structure);
        Ok(())
    }

    /// Gets a reference to a structure by name.
    pub fn get(&self, name: &str) -> Option<&dyn Structure> {
        self.structures.get(name).map(|s| s.as_ref())
    }

    /// Gets a mutable reference to a structure by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Box<dyn Structure>> {
        self.structures.get_mut(name)
    }

    /// Gets a structure by name, downcast to its concrete type.
    pub fn get_as<T: Structure>(&self, name: &str) -> Option<&T> {
        self.get(name)?.as_any().downcast_ref::<T>()
    }

    /// Checks if a structure with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.structures.contains_key(name)
    }

    /// Removes a structure by name.
    pub fn remove(&mut self, name: &str) -> Result<Box<dyn Structure>> {
        self.structures
            .remove(name)
            .ok_or_else(|| RevolveError::StructureNotFound(name.to_string()))
    }

    /// Removes all structures from the registry.
    pub fn clear(&mut self) {
        self.structures.clear();
    }

    /// Returns an iterator over all structures.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Structure> {
        self.structures.values().map(|s| s.as_ref())
    }

    /// Returns a mutable iterator over all structures.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Structure>> + '_ {
        self.structures.values_mut()
    }

    /// Returns the total number of registered structures.
    pub fn len(&self) -> usize {
        self.structures.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    /// Returns all structures of a given type.
    pub fn get_all_of_type<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = &'a dyn Structure> + 'a {
        self.iter().filter(move |s| s.type_name() == type_name)
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::*;
    use crate::lattice::Lattice;
    use crate::sink::SurfaceStyle;

    struct Dummy {
        name: String,
        style: SurfaceStyle,
        enabled: bool,
    }

    impl Dummy {
        fn boxed(name: &str) -> Box<dyn Structure> {
            Box::new(Self {
                name: name.to_string(),
                style: SurfaceStyle::default(),
                enabled: true,
            })
        }
    }

    impl Structure for Dummy {
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
            "Dummy"
        }
        fn lattices(&self) -> &[Lattice] {
            &[]
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

    #[test]
    fn test_register_and_get() {
        let mut registry = Registry::new();
        registry.register(Dummy::boxed("b")).unwrap();
        registry.register(Dummy::boxed("a")).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("a"));
        assert!(registry.get_as::<Dummy>("a").is_some());
        assert_eq!(registry.get_all_of_type("Dummy").count(), 2);

        let names: Vec<_> = registry.iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_duplicate_name() {
        let mut registry = Registry::new();
        registry.register(Dummy::boxed("x")).unwrap();
        let err = registry.register(Dummy::boxed("x")).unwrap_err();
        assert!(matches!(err, RevolveError::StructureExists(name) if name == "x"));
    }

    #[test]
    fn test_remove() {
        let mut registry = Registry::new();
        registry.register(Dummy::boxed("x")).unwrap();
        assert!(registry.remove("x").is_ok());
        assert!(registry.remove("x").is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_empty_structure_has_no_bounds() {
        let dummy = Dummy::boxed("empty");
        assert!(dummy.bounding_box().is_none());
        assert_eq!(dummy.triangle_count(crate::Stride::FULL), 0);
    }
}
