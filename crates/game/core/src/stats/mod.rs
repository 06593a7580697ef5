//! Stat derivation.
//!
//! ```text
//! [ StatDefinition (kind) ] ─┐
//! [ Species base stats    ] ─┼─> formula ─> StatEntry.value
//! [ IV / EV / level       ] ─┤
//! [ Nature percent        ] ─┘
//! ```
//!
//! `Main` stats use the HP formula, `MainBattle` stats the nature formula,
//! and `Battle` stats are not tracked at all.

pub mod block;
pub mod formula;
pub mod kind;
pub mod nature;
pub mod random;

pub use block::{
    Change, LevelUpChanges, StatBlock, StatBlockSpec, StatChange, StatEntry, StatError,
};
pub use formula::{StatInputs, calculate_hp, calculate_other};
pub use kind::{StatDefinition, StatKind};
pub use nature::{Nature, NatureStatChange, nature_index};
pub use random::{generate_iv, generate_personality};
