//! Error types for revolve-rs.

use thiserror::Error;

/// The main error type for revolve-rs operations.
#[derive(Error, Debug)]
pub enum RevolveError {
    /// Lattice subdivision counts that cannot produce a closed band.
    #[error("invalid resolution: {meridians} meridians x {rings} rings (need at least 3 x 2)")]
    InvalidResolution { meridians: usize, rings: usize },

    /// A shape parameter outside its valid domain.
    #[error("invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    /// A structure with the given name already exists.
    #[error("structure '{0}' already exists")]
    StructureExists(String),

    /// A structure with the given name was not found.
    #[error("structure '{0}' not found")]
    StructureNotFound(String),

    /// A material with the given name was not found.
    #[error("material '{0}' not found")]
    MaterialNotFound(String),

    /// The application has already run its init phase.
    #[error("application already started")]
    AlreadyStarted,

    /// A frame was requested before the init phase ran.
    #[error("application not started - call App::start() first")]
    NotStarted,

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error.
    #[error("config error: {0}")]
    ConfigError(#[from] serde_json::Error),
}

impl RevolveError {
    /// Checks that `value` is finite and strictly positive.
    pub fn require_positive(name: &'static str, value: f32) -> Result<f32> {
        if !value.is_finite() {
            return Err(Self::InvalidParameter {
                name,
                value,
                reason: "must be finite",
            });
        }
        if value <= 0.0 {
            return Err(Self::InvalidParameter {
                name,
                value,
                reason: "must be positive",
            });
        }
        Ok(value)
    }
}

/// A specialized Result type for revolve-rs operations.
pub type Result<T> = std::result::Result<T, RevolveError>;
