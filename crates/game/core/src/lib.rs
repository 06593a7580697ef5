//! Deterministic monster numerics shared across tools.
//!
//! `monster-core` holds the pure calculations: experience growth curves, stat
//! derivation from base stats, IVs, EVs and natures, and type effectiveness.
//! Reference data reaches the calculators only through the oracle traits in
//! [`env`], so the same code runs against loaded content or hand-built test
//! tables.
pub mod config;
pub mod env;
pub mod error;
pub mod exp;
pub mod ids;
pub mod stats;
pub mod types;

pub use config::{ConfigError, GameConfig};
pub use env::{
    ConfigOracle, Env, GameEnv, NatureOracle, NatureTable, OracleError, PcgRng, RngOracle,
    SpeciesCatalog, SpeciesData, SpeciesOracle, StatOracle, StatTable, TypeChart, TypeOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use exp::{ExpCurve, ExpError, GrowthRate};
pub use ids::{NatureId, SpeciesId, StatId, TypeId};
pub use stats::{
    LevelUpChanges, Nature, NatureStatChange, StatBlock, StatBlockSpec, StatDefinition,
    StatEntry, StatError, StatKind,
};
pub use types::{Effectiveness, TypeData, combined_effectiveness, type_effectiveness};
