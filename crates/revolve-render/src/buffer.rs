//! CPU-side vertex buffers, packed for upload.

use revolve_core::{SurfaceStyle, Triangle, TriangleSink};

use crate::materials::{MaterialRegistry, MaterialUniforms};
use crate::stats::FrameStats;

/// One vertex as laid out in a GPU vertex buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit outward normal.
    pub normal: [f32; 3],
}

/// Triangles of one surface, three vertices per triangle.
#[derive(Debug, Clone)]
pub struct SurfaceBatch {
    /// Name of the structure the triangles came from.
    pub name: String,
    /// Uniform style of the surface.
    pub style: SurfaceStyle,
    /// Shading constants of `style.material`, resolved when the surface began.
    pub material: MaterialUniforms,
    /// Triangle list vertices.
    pub vertices: Vec<GpuVertex>,
}

impl SurfaceBatch {
    /// Number of triangles in the batch.
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Raw bytes of the vertex data, ready for a vertex buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// A [`TriangleSink`] that records a frame as triangle-list batches.
///
/// Immediate-mode backends can submit the batches and call
/// [`FrameBuffer::clear`] each frame; retained-mode backends can keep the
/// batches and only rebuild them when the stride changes.
///
/// Material names are resolved against the buffer's [`MaterialRegistry`];
/// unknown names shade as "plastic".
#[derive(Debug, Default)]
pub struct FrameBuffer {
    batches: Vec<SurfaceBatch>,
    stats: FrameStats,
    materials: MaterialRegistry,
}

impl FrameBuffer {
    /// Creates an empty buffer using the built-in materials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer resolving materials against `materials`.
    pub fn with_materials(materials: MaterialRegistry) -> Self {
        Self {
            materials,
            ..Self::default()
        }
    }

    /// The registry material names are resolved against.
    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    /// Drops all recorded batches and resets the statistics.
    pub fn clear(&mut self) {
        self.batches.clear();
        self.stats = FrameStats::default();
    }

    /// Recorded batches, in draw order.
    pub fn batches(&self) -> &[SurfaceBatch] {
        &self.batches
    }

    /// Finds the batch recorded for structure `name`.
    pub fn batch(&self, name: &str) -> Option<&SurfaceBatch> {
        self.batches.iter().find(|b| b.name == name)
    }

    /// Statistics of the recorded frame.
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Total number of triangles recorded.
    pub fn triangle_count(&self) -> usize {
        self.stats.triangles
    }

    fn current(&mut self) -> &mut SurfaceBatch {
        if self.batches.is_empty() {
            // Triangles sent outside begin/end still get a batch.
            let style = SurfaceStyle::default();
            let material = MaterialUniforms::from(self.materials.resolve(&style.material));
            self.batches.push(SurfaceBatch {
                name: String::new(),
                style,
                material,
                vertices: Vec::new(),
            });
        }
        let last = self.batches.len() - 1;
        &mut self.batches[last]
    }
}

impl TriangleSink for FrameBuffer {
    fn begin_surface(&mut self, name: &str, style: &SurfaceStyle) {
        self.stats.surfaces += 1;
        if !self.materials.has(&style.material) {
            log::warn!(
                "surface '{name}' uses unknown material '{}', shading as plastic",
                style.material
            );
        }
        let material = MaterialUniforms::from(self.materials.resolve(&style.material));
        self.batches.push(SurfaceBatch {
            name: name.to_string(),
            style: style.clone(),
            material,
            vertices: Vec::new(),
        });
    }

    fn triangle(&mut self, triangle: &Triangle) {
        self.stats.record(triangle);
        let batch = self.current();
        batch
            .vertices
            .extend(triangle.vertices.iter().map(|v| GpuVertex {
                position: v.position.to_array(),
                normal: v.normal.to_array(),
            }));
    }

    fn end_surface(&mut self) {
        if let Some(batch) = self.batches.last() {
            log::trace!(
                "recorded surface '{}': {} triangles",
                batch.name,
                batch.triangle_count()
            );
        }
    }
}
