//! Sampled surface lattices.
//!
//! A [`Lattice`] is the `M x N` grid of points produced for one sub-surface of
//! a solid. The first axis runs over meridians (the angle around the axis of
//! revolution), the second over rings (height, radius, or polar/tube angle).

use glam::Vec3;

/// A sampled surface point with its outward normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceVertex {
    /// Position in object space.
    pub position: Vec3,
    /// Unit outward normal.
    pub normal: Vec3,
}

impl SurfaceVertex {
    /// Creates a vertex, normalizing `normal`.
    ///
    /// A zero normal (e.g. an apex) falls back to `fallback`.
    pub fn new(position: Vec3, normal: Vec3, fallback: Vec3) -> Self {
        Self {
            position,
            normal: normal.try_normalize().unwrap_or(fallback),
        }
    }

    /// Returns true if every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.normal.is_finite()
    }
}

/// How the walker treats the end of a lattice axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wrap {
    /// The last index connects back to the first (the meridian seam).
    #[default]
    Cyclic,
    /// The axis has two distinct ends; neighbours are clamped to the last index.
    Clamped,
}

/// Which way the walker winds the triangles of a cell.
///
/// A forward lattice emits `(SE, NE, SW)` and `(SW, NE, NW)`, which faces
/// along `-(d/di x d/dj)`. Surfaces whose parameter directions give the
/// opposite orientation are marked reversed so every triangle faces outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Winding {
    #[default]
    Forward,
    Reversed,
}

/// Which part of a solid a lattice covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatticeRole {
    /// Whole closed surface (sphere, torus).
    Surface,
    /// Lateral surface (cone, cylinder).
    Side,
    /// Bottom disc of a cone.
    Base,
    /// Top disc of a cylinder.
    Top,
    /// Bottom disc of a cylinder.
    Bottom,
}

impl LatticeRole {
    /// Short lowercase name, used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Surface => "surface",
            Self::Side => "side",
            Self::Base => "base",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// A fixed grid of sampled points for one sub-surface.
///
/// Dimensions and point data never change after construction.
#[derive(Debug, Clone)]
pub struct Lattice {
    role: LatticeRole,
    meridians: usize,
    rings: usize,
    meridian_wrap: Wrap,
    ring_wrap: Wrap,
    winding: Winding,
    // Meridian-major: index = i * rings + j
    vertices: Vec<SurfaceVertex>,
}

impl Lattice {
    /// Builds a lattice from meridian-major vertices.
    ///
    /// Only the sampler constructs lattices, so dimensions are trusted.
    pub(crate) fn from_vertices(
        role: LatticeRole,
        meridians: usize,
        rings: usize,
        ring_wrap: Wrap,
        vertices: Vec<SurfaceVertex>,
    ) -> Self {
        debug_assert_eq!(vertices.len(), meridians * rings);
        Self {
            role,
            meridians,
            rings,
            meridian_wrap: Wrap::Cyclic,
            ring_wrap,
            winding: Winding::Forward,
            vertices,
        }
    }

    /// Sets the triangle winding; shapes call this right after sampling.
    #[must_use]
    pub fn with_winding(mut self, winding: Winding) -> Self {
        self.winding = winding;
        self
    }

    /// Returns which part of the solid this lattice covers.
    pub fn role(&self) -> LatticeRole {
        self.role
    }

    /// Number of meridians (`M`).
    pub fn meridians(&self) -> usize {
        self.meridians
    }

    /// Number of rings (`N`).
    pub fn rings(&self) -> usize {
        self.rings
    }

    /// Wrap rule of the meridian axis.
    pub fn meridian_wrap(&self) -> Wrap {
        self.meridian_wrap
    }

    /// Wrap rule of the ring axis.
    pub fn ring_wrap(&self) -> Wrap {
        self.ring_wrap
    }

    /// Triangle winding used by the walker.
    pub fn winding(&self) -> Winding {
        self.winding
    }

    /// Total number of points (`M * N`).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the lattice has no points.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex at meridian `i`, ring `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= meridians()` or `j >= rings()`.
    pub fn vertex(&self, i: usize, j: usize) -> &SurfaceVertex {
        assert!(
            i < self.meridians && j < self.rings,
            "lattice index ({i}, {j}) out of bounds ({} x {})",
            self.meridians,
            self.rings
        );
        &self.vertices[i * self.rings + j]
    }

    /// Returns the position at meridian `i`, ring `j`.
    pub fn point(&self, i: usize, j: usize) -> Vec3 {
        self.vertex(i, j).position
    }

    /// Iterates over all vertices, meridian by meridian.
    pub fn vertices(&self) -> impl Iterator<Item = &SurfaceVertex> {
        self.vertices.iter()
    }

    /// Iterates over the vertices of ring `j`, one per meridian.
    pub fn ring(&self, j: usize) -> impl Iterator<Item = &SurfaceVertex> + '_ {
        (0..self.meridians).map(move |i| self.vertex(i, j))
    }

    /// Axis-aligned bounding box of all positions.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let first = self.vertices.first()?.position;
        Some(self.vertices.iter().fold((first, first), |(min, max), v| {
            (min.min(v.position), max.max(v.position))
        }))
    }
}
