//! Rendering side of revolve-rs.
//!
//! This crate provides what a display backend needs to consume a frame:
//! - Material definitions and registry
//! - [`FrameBuffer`], a triangle sink packing vertices for GPU upload
//! - [`FrameStats`] and [`CountingSink`] for per-frame triangle accounting

#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod materials;
pub mod stats;

pub use buffer::{FrameBuffer, GpuVertex, SurfaceBatch};
pub use materials::{Material, MaterialRegistry, MaterialUniforms};
pub use stats::{CountingSink, FrameStats};
