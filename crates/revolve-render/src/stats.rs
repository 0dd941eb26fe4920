//! Per-frame triangle statistics.

use revolve_core::{SurfaceStyle, Triangle, TriangleSink};

/// Counts gathered while a frame is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Number of surfaces begun.
    pub surfaces: usize,
    /// Number of triangles received.
    pub triangles: usize,
    /// Number of zero-area triangles among them.
    pub degenerate: usize,
}

impl FrameStats {
    /// Accounts for one triangle.
    pub fn record(&mut self, triangle: &Triangle) {
        self.triangles += 1;
        if triangle.is_degenerate() {
            self.degenerate += 1;
        }
    }

    /// Triangles that actually cover area.
    pub fn visible(&self) -> usize {
        self.triangles - self.degenerate
    }
}

/// A sink that only counts what it receives.
#[derive(Debug, Default)]
pub struct CountingSink {
    stats: FrameStats,
}

impl CountingSink {
    /// Creates a zeroed counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the counts so far.
    pub fn stats(&self) -> FrameStats {
        self.stats
    }
}

impl TriangleSink for CountingSink {
    fn begin_surface(&mut self, _name: &str, _style: &SurfaceStyle) {
        self.stats.surfaces += 1;
    }

    fn triangle(&mut self, triangle: &Triangle) {
        self.stats.record(triangle);
    }
}
