use super::{ExpError, GrowthRate};

/// A growth rate bound to the configured level cap.
///
/// Stat blocks use this to answer "how much exp for the next level" and
/// "how far into the current level" without re-checking the cap each time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpCurve {
    rate: GrowthRate,
    max_level: i32,
}

impl ExpCurve {
    pub const fn new(rate: GrowthRate, max_level: i32) -> Self {
        Self { rate, max_level }
    }

    pub const fn rate(&self) -> GrowthRate {
        self.rate
    }

    pub const fn max_level(&self) -> i32 {
        self.max_level
    }

    /// Cumulative exp required to reach `level`.
    ///
    /// # Panics
    ///
    /// Panics if `level` is outside `0..=max_level`.
    pub fn exp_for_level(&self, level: i32) -> i32 {
        match self.rate.try_exp_for_level(level, self.max_level) {
            Ok(exp) => exp,
            Err(err) => panic!("{err}"),
        }
    }

    /// # Errors
    ///
    /// Returns [`ExpError::InvalidLevel`] if `level` is outside `0..=max_level`.
    pub fn try_exp_for_level(&self, level: i32) -> Result<i32, ExpError> {
        self.rate.try_exp_for_level(level, self.max_level)
    }

    /// Threshold of the level after `level`, or 0 once the cap is reached.
    pub fn exp_for_next_level(&self, level: i32) -> i32 {
        if level >= self.max_level {
            return 0;
        }
        self.exp_for_level(level + 1)
    }

    /// Fraction of the way from `level` to the next level, in `[0, 1)`.
    ///
    /// Always 0.0 at the level cap.
    pub fn exp_percent(&self, level: i32, exp: i32) -> f32 {
        if level >= self.max_level {
            return 0.0;
        }
        let current = self.exp_for_level(level) as f32;
        let span = self.exp_for_level(level + 1) as f32 - current;
        (exp as f32 - current) / span
    }

    pub fn level_for_exp(&self, exp: i32) -> i32 {
        self.rate.level_for_exp(exp, self.max_level)
    }

    /// Exp total at the level cap.
    pub fn max_exp(&self) -> i32 {
        self.exp_for_level(self.max_level)
    }
}
