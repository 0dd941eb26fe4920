//! Configuration options for revolve-rs.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sampler::Resolution;
use crate::stride::Stride;

/// Global configuration options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Number of meridians on every lattice.
    pub meridians: usize,

    /// Number of rings on side and closed-surface lattices.
    pub rings: usize,

    /// Number of rings on cap and base discs.
    pub disc_rings: usize,

    /// Stride used for the first frame.
    pub initial_stride: u32,

    /// Default material name for structures.
    pub material: String,

    /// Default surface color.
    pub surface_color: Vec3,

    /// Window title, forwarded to the window backend.
    pub window_title: String,

    /// Window width in pixels.
    pub window_width: u32,

    /// Window height in pixels.
    pub window_height: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            meridians: 100,
            rings: 100,
            disc_rings: 50,
            initial_stride: 1,
            material: "plastic".to_string(),
            surface_color: Vec3::new(1.0, 0.0, 0.0),
            window_title: "revolve".to_string(),
            window_width: 512,
            window_height: 512,
        }
    }
}

impl Options {
    /// Loads options from a JSON file; missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parses options from JSON text and validates them.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Rejects resolutions that cannot be sampled.
    pub fn validate(&self) -> Result<()> {
        self.side_resolution().validate()?;
        self.disc_resolution().validate()
    }

    /// Resolution of side and closed-surface lattices.
    pub fn side_resolution(&self) -> Resolution {
        Resolution {
            meridians: self.meridians,
            rings: self.rings,
        }
    }

    /// Resolution of cap and base lattices; shares the meridian count.
    pub fn disc_resolution(&self) -> Resolution {
        Resolution {
            meridians: self.meridians,
            rings: self.disc_rings,
        }
    }

    /// The clamped initial stride.
    pub fn initial_stride(&self) -> Stride {
        Stride::new(self.initial_stride)
    }
}
