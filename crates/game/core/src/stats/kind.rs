//! Stat classification.
//!
//! Every stat row carries a [`StatKind`] that decides whether it is tracked by
//! a stat block (IV/EV/computed value) or only exists as a battle stage.

use crate::ids::StatId;

/// How a stat participates in stat derivation.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum StatKind {
    /// Tracked outside battle only (HP). Uses the HP formula.
    Main,
    /// Tracked and also subject to battle stages. Uses the nature formula.
    MainBattle,
    /// Battle stage only (accuracy, evasion). Never stored in a stat block.
    Battle,
}

impl StatKind {
    /// Whether the stat owns an IV/EV entry in a stat block.
    pub const fn is_main_stat(self) -> bool {
        matches!(self, Self::Main | Self::MainBattle)
    }

    /// Whether the stat can be modified by battle stages.
    pub const fn is_battle_stat(self) -> bool {
        matches!(self, Self::MainBattle | Self::Battle)
    }
}

/// A row of the stat table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatDefinition {
    pub id: StatId,
    /// Display name.
    pub name: String,
    pub kind: StatKind,
    /// Position in the stat table; entries are listed in ascending order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub order: u8,
}

impl StatDefinition {
    pub fn new(id: impl Into<StatId>, name: impl Into<String>, kind: StatKind, order: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            order,
        }
    }

    pub const fn is_main_stat(&self) -> bool {
        self.kind.is_main_stat()
    }

    pub const fn is_battle_stat(&self) -> bool {
        self.kind.is_battle_stat()
    }
}
