//! Solids of revolution for revolve-rs.
//!
//! This crate provides the concrete shapes and how they become structures:
//! - [`Cone`], [`Cylinder`], [`Sphere`] and [`Torus`] surface equations
//! - [`Disc`] caps shared by the cone and cylinder
//! - [`SolidStructure`], a sampled [`Solid`] registered in the context
//! - [`SceneDescription`] for declaring solids in JSON

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod cone;
pub mod cylinder;
pub mod disc;
pub mod scene;
pub mod solid;
pub mod sphere;
pub mod torus;

pub use cone::Cone;
pub use cylinder::Cylinder;
pub use disc::Disc;
pub use scene::{SceneDescription, SolidDescription};
pub use solid::{Solid, SolidStructure};
pub use sphere::Sphere;
pub use torus::Torus;
