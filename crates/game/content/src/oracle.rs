//! Shared, read-only oracle bundle.
//!
//! Wraps the loaded catalogs in `Arc`s so the same content can back any
//! number of [`monster_core::GameEnv`] views across threads.

use std::sync::Arc;

use monster_core::{
    Env, GameConfig, GameEnv, NatureTable, PcgRng, SpeciesCatalog, StatTable, TypeChart,
};

/// Manages all oracle implementations and provides unified access.
#[derive(Clone, Debug)]
pub struct OracleManager {
    species: Arc<SpeciesCatalog>,
    natures: Arc<NatureTable>,
    types: Arc<TypeChart>,
    stats: Arc<StatTable>,
    config: Arc<GameConfig>,
    rng: PcgRng,
}

impl OracleManager {
    pub fn new(
        species: Arc<SpeciesCatalog>,
        natures: Arc<NatureTable>,
        types: Arc<TypeChart>,
        stats: Arc<StatTable>,
        config: Arc<GameConfig>,
    ) -> Self {
        Self {
            species,
            natures,
            types,
            stats,
            config,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Converts oracle manager into GameEnv for monster-core.
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::with_all(
            self.species.as_ref(),
            self.natures.as_ref(),
            self.types.as_ref(),
            self.stats.as_ref(),
            self.config.as_ref(),
            &self.rng,
        )
        .into_game_env()
    }

    pub fn species(&self) -> &SpeciesCatalog {
        &self.species
    }

    pub fn natures(&self) -> &NatureTable {
        &self.natures
    }

    pub fn types(&self) -> &TypeChart {
        &self.types
    }

    pub fn stats(&self) -> &StatTable {
        &self.stats
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
