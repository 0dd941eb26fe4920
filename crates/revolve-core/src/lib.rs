//! Core abstractions for revolve-rs.
//!
//! This crate provides the pieces every solid of revolution is built from:
//! - [`SurfaceSampler`] turns a closed-form [`SurfaceEquation`] into a fixed [`Lattice`]
//! - [`MeshWalker`] triangulates a lattice at a runtime [`Stride`]
//! - [`Structure`] trait, [`Registry`] and the application [`Context`]
//! - Configuration [`Options`] and the [`TriangleSink`] display boundary

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Lattice indices are small; float conversions are intended
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod lattice;
pub mod options;
pub mod registry;
pub mod sampler;
pub mod sink;
pub mod state;
pub mod stride;
pub mod structure;
pub mod walker;

pub use error::{Result, RevolveError};
pub use lattice::{Lattice, LatticeRole, SurfaceVertex, Winding, Wrap};
pub use options::Options;
pub use registry::Registry;
pub use sampler::{Resolution, SurfaceEquation, SurfaceSampler};
pub use sink::{SurfaceStyle, TriangleSink};
pub use state::Context;
pub use stride::{Stride, StrideHandle, MAX_STRIDE, MIN_STRIDE};
pub use structure::Structure;
pub use walker::{LatticeCell, MeshWalker, Triangle};

// Re-export glam types for convenience
pub use glam::Vec3;
