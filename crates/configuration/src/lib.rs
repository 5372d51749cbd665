//! # Pixocc Configuration
//!
//! This crate loads the run-list specification that drives a batch: which
//! histogram store files to process, under which run identifiers, with how
//! many colliding bunches, plus optional detector-constant and table-style
//! overrides.

use std::path::Path;

use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{ConstantsOverride, RunEntry, RunListConfig, StyleOptions};

/// Loads and validates a run-list file.
///
/// This function is the primary entry point for this crate. It reads the
/// TOML file, deserializes it into our strongly-typed `RunListConfig`
/// struct, validates it, and returns it.
pub fn load_run_list(path: impl AsRef<Path>) -> Result<RunListConfig, ConfigError> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "Processing run-list config");

    let builder = config::Config::builder()
        .add_source(config::File::from(path))
        .build()?;

    let run_list = builder.try_deserialize::<RunListConfig>()?;
    run_list.validate()?;

    tracing::debug!(runs = run_list.runs.len(), "Run list loaded");
    Ok(run_list)
}
