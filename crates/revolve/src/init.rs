//! Logging bootstrap and configuration loading.

use std::path::Path;

use revolve_core::{Options, Result};
use revolve_structures::SceneDescription;

/// Installs `env_logger` with an `info` default filter.
///
/// `RUST_LOG` overrides the filter. Returns false if a logger was already
/// installed, which is harmless.
pub fn init_logging() -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .is_ok()
}

/// Loads options from a JSON file, or returns the defaults when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or
/// describes a resolution that cannot be sampled.
pub fn load_options(path: Option<&Path>) -> Result<Options> {
    match path {
        Some(path) => {
            let options = Options::from_json_file(path)?;
            log::info!("loaded options from {}", path.display());
            Ok(options)
        }
        None => Ok(Options::default()),
    }
}

/// Loads a scene from a JSON file, or returns the demo scene when `path` is `None`.
pub fn load_scene(path: Option<&Path>) -> Result<SceneDescription> {
    match path {
        Some(path) => {
            let scene = SceneDescription::from_json_file(path)?;
            log::info!("loaded {} solids from {}", scene.solids.len(), path.display());
            Ok(scene)
        }
        None => Ok(SceneDescription::demo()),
    }
}
