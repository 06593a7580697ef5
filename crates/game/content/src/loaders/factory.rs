//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use monster_core::{GameConfig, NatureTable, SpeciesCatalog, StatTable, TypeChart};

use crate::loaders::{
    ConfigLoader, LoadResult, NatureLoader, SpeciesLoader, StatLoader, TypeLoader,
    validate_content,
};
use crate::oracle::OracleManager;

/// Content factory that loads all reference tables from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── stats.ron
/// ├── natures.ron
/// ├── types.ron
/// └── species.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the stat table from `stats.ron`.
    pub fn load_stats(&self) -> LoadResult<StatTable> {
        let path = self.data_dir.join("stats.ron");
        StatLoader::load(&path).with_context(|| format!("Loading {}", path.display()))
    }

    /// Load the ordered nature table from `natures.ron`.
    pub fn load_natures(&self) -> LoadResult<NatureTable> {
        let path = self.data_dir.join("natures.ron");
        NatureLoader::load(&path).with_context(|| format!("Loading {}", path.display()))
    }

    /// Load type match-ups from `types.ron`.
    pub fn load_types(&self) -> LoadResult<TypeChart> {
        let path = self.data_dir.join("types.ron");
        TypeLoader::load(&path).with_context(|| format!("Loading {}", path.display()))
    }

    /// Load species rows from `species.ron`.
    pub fn load_species(&self) -> LoadResult<SpeciesCatalog> {
        let path = self.data_dir.join("species.ron");
        SpeciesLoader::load(&path).with_context(|| format!("Loading {}", path.display()))
    }

    /// Loads every table, validates them against each other and bundles them.
    pub fn load_all(&self) -> LoadResult<OracleManager> {
        let config = self.load_config()?;
        let stats = self.load_stats()?;
        let natures = self.load_natures()?;
        let types = self.load_types()?;
        let species = self.load_species()?;

        validate_content(&config, &stats, &natures, &types, &species)
            .with_context(|| format!("Validating content in {}", self.data_dir.display()))?;

        tracing::info!(
            data_dir = %self.data_dir.display(),
            species = species.len(),
            natures = natures.len(),
            types = types.len(),
            stats = stats.len(),
            "content loaded"
        );

        Ok(OracleManager::new(
            Arc::new(species),
            Arc::new(natures),
            Arc::new(types),
            Arc::new(stats),
            Arc::new(config),
        ))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
