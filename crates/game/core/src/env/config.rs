//! Configuration oracle for exposing game rules to the calculators.

use crate::config::GameConfig;
use crate::ids::StatId;

/// Provides access to runtime configuration values.
pub trait ConfigOracle: Send + Sync {
    /// Highest level a monster can reach.
    fn max_level(&self) -> i32;

    /// Per-stat EV cap.
    fn max_ev(&self) -> i32;

    /// Cap on the EV sum. Enforced by callers.
    fn max_total_ev(&self) -> i32;

    /// Stat whose level-up delta is mirrored onto current HP.
    fn hp_stat(&self) -> &StatId;
}

impl ConfigOracle for GameConfig {
    fn max_level(&self) -> i32 {
        self.max_level
    }

    fn max_ev(&self) -> i32 {
        self.max_ev
    }

    fn max_total_ev(&self) -> i32 {
        self.max_total_ev
    }

    fn hp_stat(&self) -> &StatId {
        &self.hp_stat
    }
}
