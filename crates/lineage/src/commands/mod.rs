//! Command implementations

pub mod config;
pub mod resolve;

use anyhow::{Context, Result};
use camino::Utf8Path;
use lineage_core::{ConfigLoader, RuntimeConfig};

/// Load the effective runtime configuration
///
/// An explicit `--config` path must exist; the default location is optional.
pub(crate) fn load_config(path: Option<&Utf8Path>) -> Result<RuntimeConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::with_path(path),
        None => ConfigLoader::new()?,
    };

    loader
        .load()
        .with_context(|| format!("Failed to load config from {}", loader.config_path()))
}
