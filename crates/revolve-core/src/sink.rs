//! Boundary between triangle producers and the display backend.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::walker::Triangle;

/// Uniform appearance of one drawn surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceStyle {
    /// Name of the material the backend should shade with.
    pub material: String,
    /// Base surface color (linear RGB).
    pub color: Vec3,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            material: "plastic".to_string(),
            color: Vec3::new(1.0, 0.0, 0.0),
        }
    }
}

/// Receives the triangles of a frame.
///
/// Structures call [`TriangleSink::begin_surface`] once per drawn structure,
/// then [`TriangleSink::triangle`] for every triangle, then
/// [`TriangleSink::end_surface`]. Zero-area triangles are part of the stream
/// and must be accepted silently.
pub trait TriangleSink {
    /// Starts a new surface with a uniform style.
    fn begin_surface(&mut self, _name: &str, _style: &SurfaceStyle) {}

    /// Accepts one triangle.
    fn triangle(&mut self, triangle: &Triangle);

    /// Finishes the current surface.
    fn end_surface(&mut self) {}
}
