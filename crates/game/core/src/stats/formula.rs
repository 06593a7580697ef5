//! Stat derivation formulas.
//!
//! All arithmetic is integer with floor division, in this order:
//!
//! ```text
//! HP    = (2·Base + IV + EV/4) · Level / 100 + Level + 10
//! Other = ((2·Base + IV + EV/4) · Level / 100 + 5) · Nature% / 100
//! ```
//!
//! `Nature%` is the nature's integer modifier (110, 100 or 90 for the
//! standard set). Using percentages keeps the final multiply exact.

use super::StatKind;

/// Inputs shared by both formulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatInputs {
    pub base: i32,
    pub iv: i32,
    pub ev: i32,
    pub level: i32,
}

impl StatInputs {
    pub const fn new(base: i32, iv: i32, ev: i32, level: i32) -> Self {
        Self {
            base,
            iv,
            ev,
            level,
        }
    }

    /// `(2·Base + IV + EV/4) · Level / 100`, the level-scaled core of both formulas.
    const fn scaled(&self) -> i32 {
        (2 * self.base + self.iv + self.ev / 4) * self.level / 100
    }
}

/// HP formula.
pub const fn calculate_hp(inputs: StatInputs) -> i32 {
    inputs.scaled() + inputs.level + 10
}

/// Nature-modified formula used by every non-HP tracked stat.
pub const fn calculate_other(inputs: StatInputs, nature_percent: i32) -> i32 {
    (inputs.scaled() + 5) * nature_percent / 100
}

/// Dispatches on the stat's kind. `Battle` stats have no derived value.
pub const fn calculate(kind: StatKind, inputs: StatInputs, nature_percent: i32) -> Option<i32> {
    match kind {
        StatKind::Main => Some(calculate_hp(inputs)),
        StatKind::MainBattle => Some(calculate_other(inputs, nature_percent)),
        StatKind::Battle => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hp_formula() {
        // Garchomp, level 78: base 108, IV 24, EV 74.
        assert_eq!(calculate_hp(StatInputs::new(108, 24, 74, 78)), 289);
        // Level 1 floor.
        assert_eq!(calculate_hp(StatInputs::new(1, 0, 0, 1)), 11);
    }

    #[test]
    fn nature_formula_rounds_down_after_modifier() {
        let attack = StatInputs::new(130, 12, 190, 78);
        assert_eq!(calculate_other(attack, 110), 278);
        assert_eq!(calculate_other(attack, 100), 253);
        assert_eq!(calculate_other(attack, 90), 227);

        let sp_attack = StatInputs::new(80, 16, 48, 78);
        assert_eq!(calculate_other(sp_attack, 90), 135);
    }

    #[test]
    fn ev_contributes_in_steps_of_four() {
        let base = StatInputs::new(100, 31, 0, 100);
        let three = StatInputs { ev: 3, ..base };
        let four = StatInputs { ev: 4, ..base };
        assert_eq!(calculate_other(base, 100), calculate_other(three, 100));
        assert_eq!(calculate_other(base, 100) + 1, calculate_other(four, 100));
    }

    #[test]
    fn battle_stats_are_not_derived() {
        let inputs = StatInputs::new(100, 31, 252, 50);
        assert_eq!(calculate(StatKind::Battle, inputs, 100), None);
        assert_eq!(
            calculate(StatKind::Main, inputs, 110),
            Some(calculate_hp(inputs))
        );
    }
}
