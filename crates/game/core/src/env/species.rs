//! Species definitions and oracle interface.

use std::collections::BTreeMap;

use super::OracleError;
use crate::exp::GrowthRate;
use crate::ids::{SpeciesId, StatId, TypeId};

/// Oracle providing species rows by id.
pub trait SpeciesOracle: Send + Sync {
    fn species(&self, id: &SpeciesId) -> Option<&SpeciesData>;

    /// Every species id, in ascending order.
    fn species_ids(&self) -> Vec<SpeciesId>;

    /// Looks up a species row, failing on an unknown id.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SpeciesNotFound` if `id` has no row.
    fn require_species(&self, id: &SpeciesId) -> Result<&SpeciesData, OracleError> {
        self.species(id)
            .ok_or_else(|| OracleError::SpeciesNotFound(id.clone()))
    }

    /// # Errors
    ///
    /// Returns `OracleError::SpeciesNotFound` for an unknown species and
    /// `OracleError::MissingBaseStat` if the row lacks `stat`.
    fn base_stat(&self, species: &SpeciesId, stat: &StatId) -> Result<i32, OracleError> {
        self.require_species(species)?.base_stat(stat)
    }

    /// # Errors
    ///
    /// Returns `OracleError::SpeciesNotFound` for an unknown species.
    fn growth_rate(&self, species: &SpeciesId) -> Result<GrowthRate, OracleError> {
        Ok(self.require_species(species)?.growth_rate)
    }
}

/// A row of the species table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesData {
    pub id: SpeciesId,
    pub name: String,
    /// One or two elemental types.
    pub types: Vec<TypeId>,
    pub base_stats: BTreeMap<StatId, i32>,
    pub growth_rate: GrowthRate,
}

impl SpeciesData {
    pub fn new(
        id: impl Into<SpeciesId>,
        name: impl Into<String>,
        types: Vec<TypeId>,
        growth_rate: GrowthRate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            types,
            base_stats: BTreeMap::new(),
            growth_rate,
        }
    }

    pub fn with_base_stat(mut self, stat: impl Into<StatId>, value: i32) -> Self {
        self.base_stats.insert(stat.into(), value);
        self
    }

    /// # Errors
    ///
    /// Returns `OracleError::MissingBaseStat` if the row lacks `stat`.
    pub fn base_stat(&self, stat: &StatId) -> Result<i32, OracleError> {
        self.base_stats
            .get(stat)
            .copied()
            .ok_or_else(|| OracleError::MissingBaseStat {
                species: self.id.clone(),
                stat: stat.clone(),
            })
    }
}
