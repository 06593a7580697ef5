//! Natures and personality-based nature selection.

use crate::ids::{NatureId, StatId};

/// A single stat adjustment applied by a nature.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NatureStatChange {
    pub stat: StatId,
    /// Signed percentage, e.g. `10` for ×1.1 and `-10` for ×0.9.
    pub percent_change: i32,
}

impl NatureStatChange {
    pub fn new(stat: impl Into<StatId>, percent_change: i32) -> Self {
        Self {
            stat: stat.into(),
            percent_change,
        }
    }
}

/// A row of the nature table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nature {
    pub id: NatureId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stat_changes: Vec<NatureStatChange>,
}

impl Nature {
    /// Percentage applied to stats the nature does not mention.
    pub const NEUTRAL_PERCENT: i32 = 100;

    pub fn new(
        id: impl Into<NatureId>,
        name: impl Into<String>,
        stat_changes: Vec<NatureStatChange>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stat_changes,
        }
    }

    /// Nature with no stat changes.
    pub fn neutral(id: impl Into<NatureId>, name: impl Into<String>) -> Self {
        Self::new(id, name, Vec::new())
    }

    /// Integer modifier for `stat`, e.g. 110 for a boosted stat.
    ///
    /// Multiple entries for the same stat stack additively.
    pub fn modifier_for(&self, stat: &StatId) -> i32 {
        Self::NEUTRAL_PERCENT
            + self
                .stat_changes
                .iter()
                .filter(|change| &change.stat == stat)
                .map(|change| change.percent_change)
                .sum::<i32>()
    }

    pub fn is_neutral(&self) -> bool {
        self.stat_changes
            .iter()
            .all(|change| change.percent_change == 0)
    }

    /// The stat raised by this nature, if any.
    pub fn boosted_stat(&self) -> Option<&StatId> {
        self.stat_changes
            .iter()
            .find(|change| change.percent_change > 0)
            .map(|change| &change.stat)
    }

    /// The stat lowered by this nature, if any.
    pub fn hindered_stat(&self) -> Option<&StatId> {
        self.stat_changes
            .iter()
            .find(|change| change.percent_change < 0)
            .map(|change| &change.stat)
    }
}

/// Index into the ordered nature table selected by a personality value.
///
/// Returns `None` for an empty table.
pub const fn nature_index(personality_value: u32, table_len: usize) -> Option<usize> {
    if table_len == 0 {
        return None;
    }
    Some(personality_value as usize % table_len)
}
