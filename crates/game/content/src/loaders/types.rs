//! Type match-up loader.

use std::path::Path;

use monster_core::{TypeChart, TypeData};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Type table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeCatalog {
    pub types: Vec<TypeData>,
}

pub struct TypeLoader;

impl TypeLoader {
    pub fn load(path: &Path) -> LoadResult<TypeChart> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses the table, warning about attacking types listed more than once
    /// for the same defender. Lookups resolve those as immunity, then
    /// weakness, then resistance.
    pub fn parse(content: &str) -> LoadResult<TypeChart> {
        let catalog: TypeCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse type table RON: {}", e))?;

        for row in &catalog.types {
            for attacking in row.conflicting_entries() {
                tracing::warn!(
                    defending = %row.id,
                    attacking = %attacking,
                    resolved = row.multiplier_against(attacking),
                    "type listed in more than one match-up list"
                );
            }
        }

        let chart = TypeChart::new(catalog.types);
        tracing::debug!(count = chart.len(), "loaded type chart");
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monster_core::type_effectiveness;

    #[test]
    fn missing_lists_default_to_empty() {
        let chart = TypeLoader::parse(
            r#"(
                types: [
                    (id: "NORMAL", name: "Normal", weaknesses: ["FIGHTING"], immunities: ["GHOST"]),
                    (id: "FIGHTING", name: "Fighting"),
                    (id: "GHOST", name: "Ghost"),
                ],
            )"#,
        )
        .unwrap();

        let fighting = "FIGHTING".into();
        let ghost = "GHOST".into();
        let normal = "NORMAL".into();
        assert_eq!(type_effectiveness(&chart, &fighting, &normal), Ok(2.0));
        assert_eq!(type_effectiveness(&chart, &ghost, &normal), Ok(0.0));
        assert_eq!(type_effectiveness(&chart, &normal, &ghost), Ok(1.0));
    }

    #[test]
    fn malformed_rows_are_rejected() {
        let err = TypeLoader::parse("(types: [(name: \"Nameless\")])").unwrap_err();
        assert!(err.to_string().contains("type table"), "{err}");
    }
}
