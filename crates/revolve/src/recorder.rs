//! Sink adapter that counts what passes through it.

use revolve_core::{SurfaceStyle, Triangle, TriangleSink};
use revolve_render::FrameStats;

/// Forwards every call to the wrapped sink and keeps [`FrameStats`].
pub struct RecordingSink<'a> {
    inner: &'a mut dyn TriangleSink,
    stats: FrameStats,
}

impl<'a> RecordingSink<'a> {
    pub fn new(inner: &'a mut dyn TriangleSink) -> Self {
        Self {
            inner,
            stats: FrameStats::default(),
        }
    }

    /// Stats gathered so far.
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Releases the wrapped sink and returns the final stats.
    pub fn finish(self) -> FrameStats {
        self.stats
    }
}

impl TriangleSink for RecordingSink<'_> {
    fn begin_surface(&mut self, name: &str, style: &SurfaceStyle) {
        self.stats.surfaces += 1;
        self.inner.begin_surface(name, style);
    }

    fn triangle(&mut self, triangle: &Triangle) {
        self.stats.record(triangle);
        self.inner.triangle(triangle);
    }

    fn end_surface(&mut self) {
        self.inner.end_surface();
    }
}
