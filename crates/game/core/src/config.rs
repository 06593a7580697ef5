use crate::error::{ErrorSeverity, GameError};
use crate::ids::StatId;

/// Game rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Highest level a monster can reach. Must lie in `1..=ABSOLUTE_MAX_LEVEL`.
    pub max_level: i32,

    /// Cap applied by `StatBlock::set_ev` to a single stat.
    pub max_ev: i32,

    /// Cap on the sum of all EVs. Enforced by callers, not by the stat formula.
    pub max_total_ev: i32,

    /// Stat whose change on level-up is mirrored onto current HP.
    pub hp_stat: StatId,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Highest level the growth-rate formulas are defined for.
    pub const ABSOLUTE_MAX_LEVEL: i32 = 100;
    /// Inclusive upper bound of an individual value.
    pub const MAX_IV: i32 = 31;
    /// Maximum number of IV/EV-tracked stats in a stat block.
    pub const MAX_MAIN_STATS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_LEVEL: i32 = 100;
    pub const DEFAULT_MAX_EV: i32 = 252;
    pub const DEFAULT_MAX_TOTAL_EV: i32 = 510;
    pub const DEFAULT_HP_STAT: &'static str = "HP";

    pub fn new() -> Self {
        Self {
            max_level: Self::DEFAULT_MAX_LEVEL,
            max_ev: Self::DEFAULT_MAX_EV,
            max_total_ev: Self::DEFAULT_MAX_TOTAL_EV,
            hp_stat: StatId::new(Self::DEFAULT_HP_STAT),
        }
    }

    pub fn with_max_level(max_level: i32) -> Self {
        Self {
            max_level,
            ..Self::new()
        }
    }

    /// Checks that every tunable lies within its legal range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=Self::ABSOLUTE_MAX_LEVEL).contains(&self.max_level) {
            return Err(ConfigError::MaxLevelOutOfRange(self.max_level));
        }
        if self.max_ev < 0 {
            return Err(ConfigError::NegativeEvCap(self.max_ev));
        }
        if self.max_total_ev < self.max_ev {
            return Err(ConfigError::TotalEvCapBelowStatCap {
                total: self.max_total_ev,
                per_stat: self.max_ev,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejected configuration values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_level {0} must be within 1..={max}", max = GameConfig::ABSOLUTE_MAX_LEVEL)]
    MaxLevelOutOfRange(i32),

    #[error("max_ev {0} must not be negative")]
    NegativeEvCap(i32),

    #[error("max_total_ev {total} is below the per-stat cap {per_stat}")]
    TotalEvCapBelowStatCap { total: i32, per_stat: i32 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MaxLevelOutOfRange(_) => "CONFIG_MAX_LEVEL_OUT_OF_RANGE",
            Self::NegativeEvCap(_) => "CONFIG_NEGATIVE_EV_CAP",
            Self::TotalEvCapBelowStatCap { .. } => "CONFIG_TOTAL_EV_CAP_BELOW_STAT_CAP",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.max_level, 100);
        assert_eq!(config.hp_stat, StatId::new("HP"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_levels_beyond_formula_range() {
        assert_eq!(
            GameConfig::with_max_level(101).validate(),
            Err(ConfigError::MaxLevelOutOfRange(101))
        );
        assert_eq!(
            GameConfig::with_max_level(0).validate(),
            Err(ConfigError::MaxLevelOutOfRange(0))
        );
        assert!(GameConfig::with_max_level(50).validate().is_ok());
    }

    #[test]
    fn rejects_inconsistent_ev_caps() {
        let config = GameConfig {
            max_total_ev: 100,
            ..GameConfig::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TotalEvCapBelowStatCap { .. })
        ));
    }
}
