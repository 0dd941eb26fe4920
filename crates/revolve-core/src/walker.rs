//! Stride-based triangulation of a lattice.
//!
//! The walker visits every `stride`-th cell of a lattice and emits two
//! triangles per visited cell. For a cell anchored at `(i, j)` the four
//! corners are:
//!
//! ```text
//! SW = (i, j)        SE = (i, j')
//! NW = (i', j)       NE = (i', j')
//! ```
//!
//! where `i'` and `j'` are the next sampled indices on each axis. A cyclic
//! axis closes the seam (`i' = min(i + s, M) mod M`), a clamped axis stops
//! at its last index (`j' = min(j + s, N - 1)`), so the boundary is reached
//! exactly whatever the stride. On a cyclic axis the step never exceeds
//! `len - 1`, so a stride at least as large as the meridian count still
//! leaves two columns instead of folding every cell onto its own meridian.
//! Cells squeezed by the clamp, or lying on a pole, produce zero-area
//! triangles; they are emitted unchanged.

use glam::Vec3;

use crate::lattice::{Lattice, SurfaceVertex, Winding, Wrap};
use crate::sink::TriangleSink;
use crate::stride::Stride;

/// One emitted triangle, with per-vertex normals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Corners in emission order.
    pub vertices: [SurfaceVertex; 3],
}

impl Triangle {
    /// Returns the corner positions.
    pub fn positions(&self) -> [Vec3; 3] {
        self.vertices.map(|v| v.position)
    }

    /// Unnormalized face normal, following the emission order.
    pub fn face_normal(&self) -> Vec3 {
        let [a, b, c] = self.positions();
        (b - a).cross(c - a)
    }

    /// Area of the triangle.
    pub fn area(&self) -> f32 {
        0.5 * self.face_normal().length()
    }

    /// Returns true if the triangle has (numerically) no area.
    pub fn is_degenerate(&self) -> bool {
        self.area() <= f32::EPSILON
    }
}

/// Lattice indices `(meridian, ring)` of the four corners of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatticeCell {
    pub sw: (usize, usize),
    pub se: (usize, usize),
    pub nw: (usize, usize),
    pub ne: (usize, usize),
}

impl LatticeCell {
    /// Corner indices of the two triangles: `(SE, NE, SW)` and `(SW, NE, NW)`.
    pub fn triangle_indices(&self) -> [[(usize, usize); 3]; 2] {
        [[self.se, self.ne, self.sw], [self.sw, self.ne, self.nw]]
    }

    /// The same cell with SE and NW exchanged, which reverses the winding
    /// of both triangles while covering the same quad.
    #[must_use]
    pub fn flipped(self) -> Self {
        Self {
            se: self.nw,
            nw: self.se,
            ..self
        }
    }
}

/// Sampling rule for one lattice axis.
#[derive(Debug, Clone, Copy)]
struct Axis {
    len: usize,
    step: usize,
    wrap: Wrap,
}

impl Axis {
    fn new(len: usize, step: usize, wrap: Wrap) -> Self {
        let step = match wrap {
            Wrap::Cyclic => step.min(len.saturating_sub(1)).max(1),
            Wrap::Clamped => step,
        };
        Self { len, step, wrap }
    }

    /// Number of indices that can anchor a cell.
    fn span(self) -> usize {
        match self.wrap {
            Wrap::Cyclic => self.len,
            Wrap::Clamped => self.len.saturating_sub(1),
        }
    }

    fn starts(self) -> impl Iterator<Item = usize> {
        (0..self.span()).step_by(self.step)
    }

    fn count(self) -> usize {
        self.span().div_ceil(self.step)
    }

    fn next(self, k: usize) -> usize {
        match self.wrap {
            Wrap::Cyclic => (k + self.step).min(self.len) % self.len,
            Wrap::Clamped => (k + self.step).min(self.len - 1),
        }
    }
}

/// Walks a lattice at a fixed stride.
///
/// Holds no state besides its inputs: every call re-walks the lattice.
#[derive(Debug, Clone, Copy)]
pub struct MeshWalker<'a> {
    lattice: &'a Lattice,
    meridian: Axis,
    ring: Axis,
}

impl<'a> MeshWalker<'a> {
    /// Creates a walker over `lattice` using the axis rules stored in it.
    pub fn new(lattice: &'a Lattice, stride: Stride) -> Self {
        Self::with_wrap(lattice, stride, lattice.meridian_wrap(), lattice.ring_wrap())
    }

    /// Creates a walker with explicit wrap rules for each axis.
    pub fn with_wrap(
        lattice: &'a Lattice,
        stride: Stride,
        meridian_wrap: Wrap,
        ring_wrap: Wrap,
    ) -> Self {
        let step = stride.get().max(1);
        Self {
            lattice,
            meridian: Axis::new(lattice.meridians(), step, meridian_wrap),
            ring: Axis::new(lattice.rings(), step, ring_wrap),
        }
    }

    /// Returns the lattice being walked.
    pub fn lattice(&self) -> &'a Lattice {
        self.lattice
    }

    /// Number of cells the walk visits.
    pub fn cell_count(&self) -> usize {
        self.meridian.count() * self.ring.count()
    }

    /// Number of triangles the walk emits (two per cell).
    pub fn triangle_count(&self) -> usize {
        2 * self.cell_count()
    }

    /// Lazily yields the visited cells, meridian by meridian.
    pub fn cells(&self) -> impl Iterator<Item = LatticeCell> + 'a {
        let meridian = self.meridian;
        let ring = self.ring;
        meridian.starts().flat_map(move |i| {
            let east = meridian.next(i);
            ring.starts().map(move |j| {
                let south = ring.next(j);
                LatticeCell {
                    sw: (i, j),
                    se: (i, south),
                    nw: (east, j),
                    ne: (east, south),
                }
            })
        })
    }

    /// Lazily yields the two triangles of each visited cell.
    pub fn triangle_pairs(&self) -> impl Iterator<Item = [Triangle; 2]> + 'a {
        let lattice = self.lattice;
        let reversed = lattice.winding() == Winding::Reversed;
        self.cells().map(move |cell| {
            let cell = if reversed { cell.flipped() } else { cell };
            cell.triangle_indices().map(|corners| Triangle {
                vertices: corners.map(|(i, j)| *lattice.vertex(i, j)),
            })
        })
    }

    /// Lazily yields every emitted triangle.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + 'a {
        self.triangle_pairs().flatten()
    }

    /// Sends every triangle to `sink` and returns how many were sent.
    pub fn emit(&self, sink: &mut dyn TriangleSink) -> usize {
        let mut count = 0;
        for triangle in self.triangles() {
            sink.triangle(&triangle);
            count += 1;
        }
        log::trace!(
            "walked {} lattice: {count} triangles",
            self.lattice.role().as_str()
        );
        count
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::lattice::LatticeRole;
    use crate::sampler::SurfaceSampler;

    fn band(meridians: usize, rings: usize) -> Lattice {
        let sampler = SurfaceSampler::new(meridians, rings).unwrap();
        sampler.generate(
            &|theta: f32, u: f32| {
                let (sin, cos) = theta.sin_cos();
                SurfaceVertex::new(Vec3::new(cos, sin, u), Vec3::new(cos, sin, 0.0), Vec3::X)
            },
            LatticeRole::Side,
            Wrap::Clamped,
        )
    }

    #[test]
    fn test_full_resolution_counts() {
        let lattice = band(10, 5);
        let walker = MeshWalker::new(&lattice, Stride::FULL);
        // 10 meridian columns (seam included) x 4 ring rows
        assert_eq!(walker.cell_count(), 40);
        assert_eq!(walker.triangles().count(), 80);
        assert_eq!(walker.triangle_count(), 80);
    }

    #[test]
    fn test_seam_closes_every_ring() {
        let lattice = band(10, 5);
        let walker = MeshWalker::new(&lattice, Stride::FULL);
        let cells: Vec<_> = walker.cells().collect();
        for j in 0..4 {
            assert!(cells.iter().any(|c| c.sw == (9, j) && c.nw == (0, j)));
        }

        // Every consecutive meridian pair is joined by some cell.
        let joined: HashSet<(usize, usize)> = cells.iter().map(|c| (c.sw.0, c.nw.0)).collect();
        for i in 0..10 {
            assert!(joined.contains(&(i, (i + 1) % 10)));
        }
    }

    #[test]
    fn test_partial_stride_clamps_to_boundary() {
        let lattice = band(10, 5);
        let walker = MeshWalker::new(&lattice, Stride::new(3));
        let cells: Vec<_> = walker.cells().collect();

        // Meridians 0, 3, 6, 9; the last column ends on the seam, not past it.
        let last = cells.iter().find(|c| c.sw == (9, 0)).unwrap();
        assert_eq!(last.nw, (0, 0));

        // Rings 0, 3; the second row is clamped to ring 4.
        let top = cells.iter().find(|c| c.sw == (0, 3)).unwrap();
        assert_eq!(top.se, (0, 4));
        assert_eq!(cells.len(), 4 * 2);
    }

    #[test]
    fn test_clamped_meridian_axis() {
        let lattice = band(6, 3);
        let walker = MeshWalker::with_wrap(&lattice, Stride::FULL, Wrap::Clamped, Wrap::Clamped);
        assert!(walker.cells().all(|c| c.nw.0 != 0));
        assert_eq!(walker.cell_count(), 5 * 2);
    }

    #[test]
    fn test_cyclic_ring_axis() {
        let lattice = band(6, 4);
        let walker = MeshWalker::with_wrap(&lattice, Stride::FULL, Wrap::Cyclic, Wrap::Cyclic);
        assert_eq!(walker.cell_count(), 6 * 4);
        assert!(walker.cells().any(|c| c.sw.1 == 3 && c.se.1 == 0));
    }

    #[test]
    fn test_triangle_corner_order() {
        let lattice = band(4, 2);
        let walker = MeshWalker::new(&lattice, Stride::FULL);
        let [first, second] = walker.triangle_pairs().next().unwrap();
        assert_eq!(first.vertices[0].position, lattice.point(0, 1));
        assert_eq!(first.vertices[1].position, lattice.point(1, 1));
        assert_eq!(first.vertices[2].position, lattice.point(0, 0));
        assert_eq!(second.vertices[0].position, lattice.point(0, 0));
        assert_eq!(second.vertices[1].position, lattice.point(1, 1));
        assert_eq!(second.vertices[2].position, lattice.point(1, 0));
    }

    #[test]
    fn test_reversed_winding_swaps_corners() {
        let lattice = band(4, 2).with_winding(Winding::Reversed);
        let walker = MeshWalker::new(&lattice, Stride::FULL);
        let [first, second] = walker.triangle_pairs().next().unwrap();
        assert_eq!(first.vertices[0].position, lattice.point(1, 0));
        assert_eq!(first.vertices[1].position, lattice.point(1, 1));
        assert_eq!(first.vertices[2].position, lattice.point(0, 0));
        assert_eq!(second.vertices[0].position, lattice.point(0, 0));
        assert_eq!(second.vertices[1].position, lattice.point(1, 1));
        assert_eq!(second.vertices[2].position, lattice.point(0, 1));
    }

    #[test]
    fn test_winding_follows_lattice_orientation() {
        // The band's parameter directions give d/di x d/dj pointing outward,
        // so the forward winding faces in and the reversed one faces out.
        let forward = band(12, 4);
        let reversed = band(12, 4).with_winding(Winding::Reversed);
        for (lattice, sign) in [(&forward, -1.0), (&reversed, 1.0)] {
            for triangle in MeshWalker::new(lattice, Stride::FULL).triangles() {
                let normal: Vec3 = triangle.vertices.iter().map(|v| v.normal).sum();
                assert!(sign * triangle.face_normal().dot(normal) > 0.0);
            }
        }
    }

    #[test]
    fn test_stride_beyond_meridian_count() {
        let lattice = band(8, 5);
        let walker = MeshWalker::new(&lattice, Stride::new(10));
        let cells: Vec<_> = walker.cells().collect();
        // The meridian step shrinks to 7: columns 0 -> 7 and 7 -> 0.
        assert_eq!(cells.len(), 2);
        for cell in &cells {
            assert_ne!(cell.sw.0, cell.nw.0);
        }
        assert!(walker.triangles().all(|t| !t.is_degenerate()));

        let lattice = band(8, 5);
        let walker = MeshWalker::new(&lattice, Stride::new(8));
        assert!(walker.cells().all(|c| c.sw.0 != c.nw.0));
    }

    #[test]
    fn test_degenerate_triangle() {
        let v = SurfaceVertex::new(Vec3::ZERO, Vec3::Z, Vec3::Z);
        let w = SurfaceVertex::new(Vec3::X, Vec3::Z, Vec3::Z);
        let flat = Triangle { vertices: [v, v, w] };
        assert!(flat.is_degenerate());
        let t = Triangle {
            vertices: [v, w, SurfaceVertex::new(Vec3::Y, Vec3::Z, Vec3::Z)],
        };
        assert!((t.area() - 0.5).abs() < 1e-6);
        assert!(!t.is_degenerate());
    }

    #[test]
    fn test_emit_is_idempotent() {
        struct Collect(Vec<Triangle>);
        impl TriangleSink for Collect {
            fn triangle(&mut self, triangle: &Triangle) {
                self.0.push(*triangle);
            }
        }

        let lattice = band(12, 7);
        let walker = MeshWalker::new(&lattice, Stride::new(2));
        let mut a = Collect(Vec::new());
        let mut b = Collect(Vec::new());
        assert_eq!(walker.emit(&mut a), walker.emit(&mut b));
        assert_eq!(a.0, b.0);
    }

    proptest! {
        #[test]
        fn prop_last_ring_is_reached(m in 3usize..40, n in 2usize..40, s in 1u32..=10) {
            let lattice = band(m, n);
            let walker = MeshWalker::new(&lattice, Stride::new(s));
            prop_assert!(walker.cells().any(|c| c.se.1 == n - 1));
        }

        #[test]
        fn prop_indices_in_bounds(m in 3usize..40, n in 2usize..40, s in 0u32..=50) {
            let lattice = band(m, n);
            let walker = MeshWalker::new(&lattice, Stride::new(s));
            for cell in walker.cells() {
                for (i, j) in [cell.sw, cell.se, cell.nw, cell.ne] {
                    prop_assert!(i < m && j < n);
                }
            }
            prop_assert_eq!(walker.cells().count(), walker.cell_count());
        }

        #[test]
        fn prop_count_non_increasing(m in 3usize..60, n in 2usize..60, s in 1u32..10) {
            let lattice = band(m, n);
            let finer = MeshWalker::new(&lattice, Stride::new(s)).triangles().count();
            let coarser = MeshWalker::new(&lattice, Stride::new(s + 1)).triangles().count();
            prop_assert!(coarser <= finer);
        }
    }
}
