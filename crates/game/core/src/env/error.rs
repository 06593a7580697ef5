//! Oracle access errors.
//!
//! Errors related to oracle availability and reference data lookups.

use crate::error::{ErrorSeverity, GameError};
use crate::ids::{NatureId, SpeciesId, StatId, TypeId};

/// Errors that occur when accessing Oracle data.
///
/// A missing oracle is fatal. A missing row means the reference data is
/// incomplete; the content loaders validate against this at import time, so
/// hitting one at runtime indicates corrupted or hand-built data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// SpeciesOracle is not available in the environment.
    #[error("SpeciesOracle not available")]
    SpeciesNotAvailable,

    /// NatureOracle is not available in the environment.
    #[error("NatureOracle not available")]
    NaturesNotAvailable,

    /// TypeOracle is not available in the environment.
    #[error("TypeOracle not available")]
    TypesNotAvailable,

    /// StatOracle is not available in the environment.
    #[error("StatOracle not available")]
    StatsNotAvailable,

    /// ConfigOracle is not available in the environment.
    #[error("ConfigOracle not available")]
    ConfigNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,

    #[error("species '{0}' not found")]
    SpeciesNotFound(SpeciesId),

    #[error("nature '{0}' not found")]
    NatureNotFound(NatureId),

    #[error("type '{0}' not found")]
    TypeNotFound(TypeId),

    #[error("stat '{0}' not found")]
    StatNotFound(StatId),

    /// Species row has no base value for a tracked stat.
    #[error("species '{species}' has no base value for stat '{stat}'")]
    MissingBaseStat { species: SpeciesId, stat: StatId },

    /// Nature table is empty, so no nature can be derived from a personality value.
    #[error("nature table is empty")]
    EmptyNatureTable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Missing oracles are fatal - nothing can be computed
            SpeciesNotAvailable | NaturesNotAvailable | TypesNotAvailable | StatsNotAvailable
            | ConfigNotAvailable | RngNotAvailable => ErrorSeverity::Fatal,

            // Not found errors are validation errors - invalid references
            SpeciesNotFound(_)
            | NatureNotFound(_)
            | TypeNotFound(_)
            | StatNotFound(_)
            | MissingBaseStat { .. }
            | EmptyNatureTable => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            SpeciesNotAvailable => "ORACLE_SPECIES_NOT_AVAILABLE",
            NaturesNotAvailable => "ORACLE_NATURES_NOT_AVAILABLE",
            TypesNotAvailable => "ORACLE_TYPES_NOT_AVAILABLE",
            StatsNotAvailable => "ORACLE_STATS_NOT_AVAILABLE",
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            SpeciesNotFound(_) => "ORACLE_SPECIES_NOT_FOUND",
            NatureNotFound(_) => "ORACLE_NATURE_NOT_FOUND",
            TypeNotFound(_) => "ORACLE_TYPE_NOT_FOUND",
            StatNotFound(_) => "ORACLE_STAT_NOT_FOUND",
            MissingBaseStat { .. } => "ORACLE_MISSING_BASE_STAT",
            EmptyNatureTable => "ORACLE_EMPTY_NATURE_TABLE",
        }
    }
}
