//! UI layer for revolve-rs using egui.
//!
//! The [`ControlPanel`] holds the scroll controls registered by the
//! application; [`panels`] has the section builders shown beside them.

#![allow(clippy::must_use_candidate)]

pub mod control;
pub mod panels;

pub use control::{ControlPanel, ScrollControl};
pub use panels::*;
