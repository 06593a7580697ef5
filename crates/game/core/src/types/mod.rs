//! Type effectiveness.
//!
//! A defending type lists the attacking types it is weak to, resists, or is
//! immune to. Looking up one (attacking, defending) pair yields exactly one
//! of four multipliers. When an attacking type appears in more than one list
//! the strongest rule wins: immunity, then weakness, then resistance.

use crate::env::{OracleError, TypeOracle};
use crate::ids::TypeId;

pub const NO_EFFECT: f32 = 0.0;
pub const NOT_VERY_EFFECTIVE: f32 = 0.5;
pub const NORMAL: f32 = 1.0;
pub const SUPER_EFFECTIVE: f32 = 2.0;

/// A row of the type table, seen from the defending side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeData {
    pub id: TypeId,
    pub name: String,
    /// Attacking types that deal double damage.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weaknesses: Vec<TypeId>,
    /// Attacking types that deal half damage.
    #[cfg_attr(feature = "serde", serde(default))]
    pub resistances: Vec<TypeId>,
    /// Attacking types that deal no damage.
    #[cfg_attr(feature = "serde", serde(default))]
    pub immunities: Vec<TypeId>,
}

impl TypeData {
    pub fn new(id: impl Into<TypeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn weak_to<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeId>,
    {
        self.weaknesses.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn resists<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeId>,
    {
        self.resistances.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn immune_to<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeId>,
    {
        self.immunities.extend(types.into_iter().map(Into::into));
        self
    }

    /// Multiplier for a hit by `attacking` against this type.
    pub fn multiplier_against(&self, attacking: &TypeId) -> f32 {
        if self.immunities.contains(attacking) {
            NO_EFFECT
        } else if self.weaknesses.contains(attacking) {
            SUPER_EFFECTIVE
        } else if self.resistances.contains(attacking) {
            NOT_VERY_EFFECTIVE
        } else {
            NORMAL
        }
    }

    /// Attacking types listed in more than one of this type's lists.
    pub fn conflicting_entries(&self) -> Vec<&TypeId> {
        let lists = [&self.weaknesses, &self.resistances, &self.immunities];
        let mut conflicts: Vec<&TypeId> = Vec::new();
        for (index, list) in lists.iter().enumerate() {
            for id in list.iter() {
                let repeated = lists[index + 1..].iter().any(|other| other.contains(id));
                if repeated && !conflicts.contains(&id) {
                    conflicts.push(id);
                }
            }
        }
        conflicts
    }

    /// Every type id referenced by this row's lists.
    pub fn referenced_types(&self) -> impl Iterator<Item = &TypeId> {
        self.weaknesses
            .iter()
            .chain(&self.resistances)
            .chain(&self.immunities)
    }
}

/// Effectiveness band of a multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effectiveness {
    NoEffect,
    NotVeryEffective,
    Normal,
    SuperEffective,
}

impl Effectiveness {
    /// Classifies any multiplier, including products of several pairs.
    pub fn from_multiplier(multiplier: f32) -> Self {
        if is_ineffective(multiplier) {
            Self::NoEffect
        } else if is_not_very_effective(multiplier) {
            Self::NotVeryEffective
        } else if is_super_effective(multiplier) {
            Self::SuperEffective
        } else {
            Self::Normal
        }
    }

    /// Canonical single-pair multiplier for this band.
    pub const fn multiplier(self) -> f32 {
        match self {
            Self::NoEffect => NO_EFFECT,
            Self::NotVeryEffective => NOT_VERY_EFFECTIVE,
            Self::Normal => NORMAL,
            Self::SuperEffective => SUPER_EFFECTIVE,
        }
    }
}

pub fn is_ineffective(multiplier: f32) -> bool {
    multiplier <= NO_EFFECT
}

pub fn is_not_very_effective(multiplier: f32) -> bool {
    multiplier > NO_EFFECT && multiplier < NORMAL
}

/// Ineffective or not very effective.
pub fn is_resistant(multiplier: f32) -> bool {
    multiplier < NORMAL
}

pub fn is_normal(multiplier: f32) -> bool {
    multiplier == NORMAL
}

pub fn is_super_effective(multiplier: f32) -> bool {
    multiplier > NORMAL
}

/// Multiplier for `attacking` hitting a single `defending` type.
///
/// # Errors
///
/// Returns `OracleError::TypeNotFound` if either type is unknown.
pub fn type_effectiveness<O>(
    oracle: &O,
    attacking: &TypeId,
    defending: &TypeId,
) -> Result<f32, OracleError>
where
    O: TypeOracle + ?Sized,
{
    oracle.require_type(attacking)?;
    Ok(oracle.require_type(defending)?.multiplier_against(attacking))
}

/// Product of the single-pair multipliers against every defending type.
///
/// An empty `defending` slice yields [`NORMAL`].
///
/// # Errors
///
/// Returns `OracleError::TypeNotFound` if any type is unknown.
pub fn combined_effectiveness<O>(
    oracle: &O,
    attacking: &TypeId,
    defending: &[TypeId],
) -> Result<f32, OracleError>
where
    O: TypeOracle + ?Sized,
{
    defending.iter().try_fold(NORMAL, |total, defender| {
        Ok(total * type_effectiveness(oracle, attacking, defender)?)
    })
}
