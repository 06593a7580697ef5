//! Experience growth rates and level thresholds.
mod curve;
mod growth_rate;

pub use curve::ExpCurve;
pub use growth_rate::GrowthRate;

use crate::error::{ErrorSeverity, GameError};

/// Errors raised by the checked exp lookups.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpError {
    #[error("invalid level {level}: expected 0..={max_level}")]
    InvalidLevel { level: i32, max_level: i32 },
}

impl GameError for ExpError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidLevel { .. } => "EXP_INVALID_LEVEL",
        }
    }
}
