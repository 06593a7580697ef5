//! Shared error classification for monster-core.
//!
//! Each calculator defines its own `thiserror` enum next to the code it
//! guards (`ExpError`, `StatError`, `OracleError`, `ConfigError`). They all
//! implement [`GameError`] so callers can triage failures uniformly: a bad
//! level or an unknown nature id is the caller's input to fix, while a
//! missing oracle means the environment was assembled wrong.

/// How a caller should treat an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum ErrorSeverity {
    /// Rejected input or reference data: out-of-range level, unknown id,
    /// species row without a base stat.
    Validation,

    /// Inconsistent internal state, such as a tracked stat without a formula.
    Internal,

    /// The environment cannot serve the request, e.g. a required oracle is
    /// absent.
    Fatal,
}

impl ErrorSeverity {
    /// True for errors caused by the data or arguments handed in.
    pub const fn is_input_error(self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all monster-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier of the variant, e.g. `ORACLE_SPECIES_NOT_FOUND`.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
