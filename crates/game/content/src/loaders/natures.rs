//! Nature table loader.
//!
//! Row order in the file is the table order used for personality-derived
//! natures, so the loader never reorders.

use std::path::Path;

use monster_core::{Nature, NatureTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Nature table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NatureCatalog {
    pub natures: Vec<Nature>,
}

pub struct NatureLoader;

impl NatureLoader {
    pub fn load(path: &Path) -> LoadResult<NatureTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<NatureTable> {
        let catalog: NatureCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse nature table RON: {}", e))?;

        let table = NatureTable::new(catalog.natures);
        tracing::debug!(count = table.len(), "loaded nature table");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monster_core::NatureOracle;

    #[test]
    fn keeps_file_order() {
        let table = NatureLoader::parse(
            r#"(
                natures: [
                    (id: "HARDY", name: "Hardy"),
                    (id: "LONELY", name: "Lonely", stat_changes: [
                        (stat: "ATTACK", percent_change: 10),
                        (stat: "DEFENSE", percent_change: -10),
                    ]),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(table.natures()[1].id.as_str(), "LONELY");
        assert_eq!(table.nature_for_personality(3).unwrap().id.as_str(), "LONELY");
        assert!(table.natures()[0].is_neutral());
    }
}
