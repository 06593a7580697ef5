//! Content loaders for reading reference tables from files.
//!
//! Each loader turns one RON/TOML file into the matching `monster-core`
//! catalog. [`ContentFactory`] ties them to a data directory.

pub mod config;
pub mod factory;
pub mod natures;
pub mod species;
pub mod stats;
pub mod types;
pub mod validate;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use natures::NatureLoader;
pub use species::SpeciesLoader;
pub use stats::StatLoader;
pub use types::TypeLoader;
pub use validate::validate_content;

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))
}
