//! Stat table loader.

use std::path::Path;

use monster_core::{StatDefinition, StatTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Stat table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatCatalog {
    pub stats: Vec<StatDefinition>,
}

/// Loader for the stat table from RON files.
pub struct StatLoader;

impl StatLoader {
    pub fn load(path: &Path) -> LoadResult<StatTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<StatTable> {
        let catalog: StatCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse stat table RON: {}", e))?;

        let table = StatTable::new(catalog.stats);
        tracing::debug!(count = table.len(), "loaded stat table");
        Ok(table)
    }
}
