//! Experience growth curves.
//!
//! Each curve maps a level to the cumulative experience required to reach it.
//! Values match the published reference tables exactly, so every formula is
//! evaluated with integer floor division. Levels 0 and 1 are fixed points
//! shared by all curves: level 0 yields the `-1` sentinel (no monster exists
//! at level 0) and level 1 yields 0.

use crate::config::GameConfig;

use super::ExpError;

/// Experience curve family assigned to a species.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum GrowthRate {
    /// Fast early, then slow; 600,000 exp at level 100.
    Erratic,
    /// 800,000 exp at level 100.
    Fast,
    /// Cubic curve; 1,000,000 exp at level 100. Also known as "Medium Fast".
    #[strum(to_string = "Medium", serialize = "MediumFast")]
    #[cfg_attr(feature = "serde", serde(alias = "MediumFast"))]
    Medium,
    /// 1,059,860 exp at level 100. Also known as "Medium Slow".
    #[strum(to_string = "Parabolic", serialize = "MediumSlow")]
    #[cfg_attr(feature = "serde", serde(alias = "MediumSlow"))]
    Parabolic,
    /// 1,250,000 exp at level 100.
    Slow,
    /// Slow early, then fast; 1,640,000 exp at level 100.
    Fluctuating,
}

impl GrowthRate {
    /// Exp value returned for level 0.
    pub const INVALID_EXP: i32 = -1;

    pub const ALL: [GrowthRate; 6] = [
        GrowthRate::Erratic,
        GrowthRate::Fast,
        GrowthRate::Medium,
        GrowthRate::Parabolic,
        GrowthRate::Slow,
        GrowthRate::Fluctuating,
    ];

    /// Cumulative experience required to reach `level`.
    ///
    /// # Panics
    ///
    /// Panics if `level` is outside `0..=GameConfig::ABSOLUTE_MAX_LEVEL`. An
    /// out-of-range level is a caller bug; use [`GrowthRate::try_exp_for_level`]
    /// to validate untrusted input.
    pub fn exp_for_level(self, level: i32) -> i32 {
        assert!(
            (0..=GameConfig::ABSOLUTE_MAX_LEVEL).contains(&level),
            "level {level} is outside 0..={}",
            GameConfig::ABSOLUTE_MAX_LEVEL
        );
        match level {
            0 => Self::INVALID_EXP,
            1 => 0,
            n => self.formula(n),
        }
    }

    /// Checked variant of [`GrowthRate::exp_for_level`] bounded by `max_level`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpError::InvalidLevel`] if `level` is outside `0..=max_level`
    /// or `max_level` exceeds the range the formulas are defined for.
    pub fn try_exp_for_level(self, level: i32, max_level: i32) -> Result<i32, ExpError> {
        if !(0..=max_level).contains(&level) || max_level > GameConfig::ABSOLUTE_MAX_LEVEL {
            return Err(ExpError::InvalidLevel { level, max_level });
        }
        Ok(self.exp_for_level(level))
    }

    /// Highest level in `1..=max_level` whose threshold does not exceed `exp`.
    pub fn level_for_exp(self, exp: i32, max_level: i32) -> i32 {
        let max_level = max_level.clamp(1, GameConfig::ABSOLUTE_MAX_LEVEL);

        // Thresholds are non-decreasing, so binary search for the last level
        // whose threshold is still reachable.
        let (mut low, mut high) = (1, max_level);
        while low < high {
            let mid = low + (high - low + 1) / 2;
            if self.exp_for_level(mid) <= exp {
                low = mid;
            } else {
                high = mid - 1;
            }
        }
        low
    }

    fn formula(self, n: i32) -> i32 {
        let cube = n * n * n;
        match self {
            GrowthRate::Erratic => match n {
                2..50 => cube * (100 - n) / 50,
                50..68 => cube * (150 - n) / 100,
                68..98 => cube * ((1911 - 10 * n) / 3) / 500,
                _ => cube * (160 - n) / 100,
            },
            GrowthRate::Fast => cube * 4 / 5,
            GrowthRate::Medium => cube,
            GrowthRate::Parabolic => cube * 6 / 5 - 15 * n * n + 100 * n - 140,
            GrowthRate::Slow => cube * 5 / 4,
            GrowthRate::Fluctuating => match n {
                2..15 => cube * ((n + 1) / 3 + 24) / 50,
                15..36 => cube * (n + 14) / 50,
                _ => cube * (n / 2 + 32) / 50,
            },
        }
    }
}
