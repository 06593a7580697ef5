//! Import-time consistency checks across loaded tables.
//!
//! The core reports missing rows as typed errors; running these checks once
//! after loading guarantees they never fire for shipped content.

use std::collections::BTreeSet;

use monster_core::{
    GameConfig, NatureOracle, NatureTable, OracleError, SpeciesCatalog, StatKind, StatOracle,
    StatTable, TypeChart, TypeOracle,
};

use crate::loaders::LoadResult;

/// Checks that the tables reference each other consistently.
///
/// Every problem is logged; the returned error reports how many were found.
pub fn validate_content(
    config: &GameConfig,
    stats: &StatTable,
    natures: &NatureTable,
    types: &TypeChart,
    species: &SpeciesCatalog,
) -> LoadResult<()> {
    let problems = collect_problems(config, stats, natures, types, species);
    for problem in &problems {
        tracing::error!("{problem}");
    }
    if !problems.is_empty() {
        anyhow::bail!(
            "content validation failed with {} problem(s); first: {}",
            problems.len(),
            problems[0]
        );
    }
    Ok(())
}

fn collect_problems(
    config: &GameConfig,
    stats: &StatTable,
    natures: &NatureTable,
    types: &TypeChart,
    species: &SpeciesCatalog,
) -> Vec<String> {
    let mut problems = Vec::new();

    let main_stats = stats.main_stats();
    if main_stats.len() > GameConfig::MAX_MAIN_STATS {
        problems.push(format!(
            "stat table tracks {} stats, at most {} are supported",
            main_stats.len(),
            GameConfig::MAX_MAIN_STATS
        ));
    }
    if stats.definition(&config.hp_stat).is_none() {
        problems.push(OracleError::StatNotFound(config.hp_stat.clone()).to_string());
    }

    if natures.is_empty() {
        problems.push(OracleError::EmptyNatureTable.to_string());
    }
    // Personality indexing counts every row, so ids must be unique.
    let mut seen = BTreeSet::new();
    for nature in natures.natures() {
        if !seen.insert(&nature.id) {
            problems.push(format!("nature '{}' is listed more than once", nature.id));
        }
        for change in &nature.stat_changes {
            match stats.kind(&change.stat) {
                Ok(StatKind::MainBattle) => {}
                Ok(kind) => problems.push(format!(
                    "nature '{}' changes {} stat '{}', which ignores natures",
                    nature.id, kind, change.stat
                )),
                Err(err) => problems.push(format!("nature '{}': {err}", nature.id)),
            }
        }
    }

    for row in types.iter() {
        for referenced in row.referenced_types() {
            if types.type_data(referenced).is_none() {
                problems.push(format!(
                    "type '{}': {}",
                    row.id,
                    OracleError::TypeNotFound(referenced.clone())
                ));
            }
        }
    }

    for row in species.iter() {
        if row.types.is_empty() {
            problems.push(format!("species '{}' has no type", row.id));
        }
        for type_id in &row.types {
            if types.type_data(type_id).is_none() {
                problems.push(format!(
                    "species '{}': {}",
                    row.id,
                    OracleError::TypeNotFound(type_id.clone())
                ));
            }
        }
        for stat in &main_stats {
            if let Err(err) = row.base_stat(&stat.id) {
                problems.push(err.to_string());
            }
        }
    }

    problems
}
