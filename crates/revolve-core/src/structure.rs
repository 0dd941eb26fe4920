//! Structure trait and related types.
//!
//! A [`Structure`] is a drawable object in the scene: a set of lattices
//! generated once, plus the appearance used when walking them.

use std::any::Any;

use glam::Vec3;

use crate::lattice::Lattice;
use crate::sink::{SurfaceStyle, TriangleSink};
use crate::stride::Stride;
use crate::walker::MeshWalker;

/// A geometric object that can be drawn each frame.
///
/// Structures have:
/// - A unique name
/// - One or more immutable lattices
/// - Visibility state and a uniform surface style
pub trait Structure: Any {
    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns a mutable reference to self as `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Returns the unique name of this structure.
    fn name(&self) -> &str;

    /// Returns the type name of this structure (e.g. "`Sphere`").
    fn type_name(&self) -> &'static str;

    /// Returns the lattices that make up the surface.
    fn lattices(&self) -> &[Lattice];

    /// Returns the uniform style of the surface.
    fn style(&self) -> &SurfaceStyle;

    /// Returns the style for editing from the UI.
    fn style_mut(&mut self) -> &mut SurfaceStyle;

    /// Returns whether this structure is drawn.
    fn is_enabled(&self) -> bool;

    /// Sets whether this structure is drawn.
    fn set_enabled(&mut self, enabled: bool);

    /// Returns the axis-aligned bounding box of all lattices.
    fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        self.lattices()
            .iter()
            .filter_map(Lattice::bounding_box)
            .reduce(|(amin, amax), (bmin, bmax)| (amin.min(bmin), amax.max(bmax)))
    }

    /// Walks every lattice at `stride` and forwards the triangles to `sink`.
    ///
    /// Returns the number of triangles emitted.
    fn draw(&self, stride: Stride, sink: &mut dyn TriangleSink) -> usize {
        sink.begin_surface(self.name(), self.style());
        let count = self
            .lattices()
            .iter()
            .map(|lattice| MeshWalker::new(lattice, stride).emit(sink))
            .sum();
        sink.end_surface();
        count
    }

    /// Number of triangles [`Structure::draw`] would emit at `stride`.
    fn triangle_count(&self, stride: Stride) -> usize {
        self.lattices()
            .iter()
            .map(|lattice| MeshWalker::new(lattice, stride).triangle_count())
            .sum()
    }
}
