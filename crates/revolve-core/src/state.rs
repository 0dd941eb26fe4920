//! Application context.
//!
//! Everything a frame needs lives in one [`Context`] owned by the
//! application and passed by reference to the callbacks, so separate scenes
//! never share a stride.

use glam::Vec3;

use crate::options::Options;
use crate::registry::Registry;
use crate::sink::TriangleSink;
use crate::stride::{Stride, StrideHandle};

/// State shared by the init, control and draw phases.
pub struct Context {
    /// The structure registry.
    pub registry: Registry,

    /// Options the context was created with.
    pub options: Options,

    /// Representative length scale for all registered structures.
    pub length_scale: f32,

    /// Axis-aligned bounding box for all registered structures.
    pub bounding_box: (Vec3, Vec3),

    stride: StrideHandle,
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Context {
    /// Creates a context with an empty registry.
    pub fn new(options: Options) -> Self {
        let stride = StrideHandle::new(options.initial_stride());
        Self {
            registry: Registry::new(),
            options,
            length_scale: 1.0,
            bounding_box: (Vec3::ZERO, Vec3::ONE),
            stride,
        }
    }

    /// Returns a handle to the stride; controls bind to this.
    pub fn stride_handle(&self) -> StrideHandle {
        self.stride.clone()
    }

    /// Reads the current stride.
    pub fn stride(&self) -> Stride {
        self.stride.get()
    }

    /// Computes the center of the bounding box.
    pub fn center(&self) -> Vec3 {
        (self.bounding_box.0 + self.bounding_box.1) * 0.5
    }

    /// Updates the global bounding box and length scale from all structures.
    pub fn update_extents(&mut self) {
        let extent = self
            .registry
            .iter()
            .filter_map(|s| s.bounding_box())
            .reduce(|(amin, amax), (bmin, bmax)| (amin.min(bmin), amax.max(bmax)));

        if let Some((min, max)) = extent {
            self.bounding_box = (min, max);
            self.length_scale = (max - min).length();
        } else {
            self.bounding_box = (Vec3::ZERO, Vec3::ONE);
            self.length_scale = 1.0;
        }
    }

    /// Draws every enabled structure at `stride`.
    ///
    /// Returns the number of triangles emitted.
    pub fn draw_structures(&self, stride: Stride, sink: &mut dyn TriangleSink) -> usize {
        self.registry
            .iter()
            .filter(|s| s.is_enabled())
            .map(|s| s.draw(stride, sink))
            .sum()
    }
}
