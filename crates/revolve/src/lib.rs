//! revolve-rs: parametric solids of revolution with a runtime level of detail.
//!
//! Each solid (cone, cylinder, sphere, torus) is sampled once into fixed
//! lattices of points and normals. Every frame the lattices are re-walked at
//! the current *stride*, an integer in `[1, 10]` the user moves with a
//! slider, and the resulting triangles are handed to a [`TriangleSink`].
//!
//! # Quick Start
//!
//! ```no_run
//! use revolve::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let mut app = App::new(Options::default());
//!     app.set_init_function(|ctx| SceneDescription::demo().register_all(ctx));
//!     app.start()?;
//!
//!     let mut buffer = FrameBuffer::new();
//!     app.frame(&mut buffer)?;
//!     println!("{} triangles", buffer.triangle_count());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`SurfaceSampler`] evaluates a [`SurfaceEquation`] on an `M x N` grid
//! - [`MeshWalker`] turns a [`Lattice`] into triangles at a [`Stride`]
//! - [`App`] runs the init, control, animation, draw and exit phases around a [`Context`]

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod app;
pub mod headless;
mod init;
mod recorder;

pub use app::{AnimFn, App, CtrlFn, DrawFn, ExitFn, FrameOutput, InitFn};
pub use init::{init_logging, load_options, load_scene};
pub use recorder::RecordingSink;

// Re-export core types
pub use revolve_core::{
    Context, Lattice, LatticeCell, LatticeRole, MeshWalker, Options, Registry, Resolution, Result,
    RevolveError, Stride, StrideHandle, Structure, SurfaceEquation, SurfaceSampler, SurfaceStyle,
    SurfaceVertex, Triangle, TriangleSink, Vec3, Winding, Wrap, MAX_STRIDE, MIN_STRIDE,
};

// Re-export render types
pub use revolve_render::{
    CountingSink, FrameBuffer, FrameStats, GpuVertex, Material, MaterialRegistry, MaterialUniforms,
    SurfaceBatch,
};

// Re-export structures
pub use revolve_structures::{
    Cone, Cylinder, Disc, SceneDescription, Solid, SolidDescription, SolidStructure, Sphere, Torus,
};

// Re-export UI types
pub use revolve_ui::{ControlPanel, ScrollControl};
