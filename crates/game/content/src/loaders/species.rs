//! Species catalog loader.

use std::path::Path;

use monster_core::{SpeciesCatalog, SpeciesData};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Species catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesFile {
    pub species: Vec<SpeciesData>,
}

pub struct SpeciesLoader;

impl SpeciesLoader {
    pub fn load(path: &Path) -> LoadResult<SpeciesCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SpeciesCatalog> {
        let file: SpeciesFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse species catalog RON: {}", e))?;

        let catalog = SpeciesCatalog::new(file.species);
        tracing::debug!(count = catalog.len(), "loaded species catalog");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monster_core::{GrowthRate, SpeciesOracle};

    #[test]
    fn parses_growth_rate_aliases() {
        let catalog = SpeciesLoader::parse(
            r#"(
                species: [
                    (
                        id: "BULBASAUR",
                        name: "Bulbasaur",
                        types: ["GRASS", "POISON"],
                        base_stats: {"HP": 45, "ATTACK": 49},
                        growth_rate: MediumSlow,
                    ),
                ],
            )"#,
        )
        .unwrap();

        let id = "bulbasaur".into();
        assert_eq!(catalog.growth_rate(&id), Ok(GrowthRate::Parabolic));
        assert_eq!(catalog.base_stat(&id, &"attack".into()), Ok(49));
    }
}
