//! In-memory oracle implementations.
//!
//! Each catalog owns the rows of one reference table and answers lookups
//! from them. Content loaders build these once at startup; after that they
//! are read-only and can be shared across threads.

use std::collections::BTreeMap;

use super::{NatureOracle, SpeciesData, SpeciesOracle, StatOracle, TypeOracle};
use crate::ids::{NatureId, SpeciesId, StatId, TypeId};
use crate::stats::{Nature, StatDefinition};
use crate::types::TypeData;

/// Species rows keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpeciesCatalog {
    species: BTreeMap<SpeciesId, SpeciesData>,
}

impl SpeciesCatalog {
    /// Later rows replace earlier rows with the same id.
    pub fn new(rows: impl IntoIterator<Item = SpeciesData>) -> Self {
        Self {
            species: rows.into_iter().map(|row| (row.id.clone(), row)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpeciesData> {
        self.species.values()
    }
}

impl SpeciesOracle for SpeciesCatalog {
    fn species(&self, id: &SpeciesId) -> Option<&SpeciesData> {
        self.species.get(id)
    }

    fn species_ids(&self) -> Vec<SpeciesId> {
        self.species.keys().cloned().collect()
    }
}

/// Natures in table order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NatureTable {
    natures: Vec<Nature>,
    index: BTreeMap<NatureId, usize>,
}

impl NatureTable {
    /// Keeps row order. A repeated id resolves to its last row.
    pub fn new(rows: impl IntoIterator<Item = Nature>) -> Self {
        let natures: Vec<Nature> = rows.into_iter().collect();
        let index = natures
            .iter()
            .enumerate()
            .map(|(position, nature)| (nature.id.clone(), position))
            .collect();
        Self { natures, index }
    }

    pub fn len(&self) -> usize {
        self.natures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.natures.is_empty()
    }
}

impl NatureOracle for NatureTable {
    fn nature(&self, id: &NatureId) -> Option<&Nature> {
        self.index
            .get(id)
            .and_then(|&position| self.natures.get(position))
    }

    fn natures(&self) -> &[Nature] {
        &self.natures
    }
}

/// Type rows keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeChart {
    types: BTreeMap<TypeId, TypeData>,
}

impl TypeChart {
    pub fn new(rows: impl IntoIterator<Item = TypeData>) -> Self {
        Self {
            types: rows.into_iter().map(|row| (row.id.clone(), row)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeData> {
        self.types.values()
    }
}

impl TypeOracle for TypeChart {
    fn type_data(&self, id: &TypeId) -> Option<&TypeData> {
        self.types.get(id)
    }

    fn type_ids(&self) -> Vec<TypeId> {
        self.types.keys().cloned().collect()
    }
}

/// Stat definitions sorted by their `order` field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatTable {
    definitions: Vec<StatDefinition>,
}

impl StatTable {
    /// Sorts rows by `order`; rows with equal order keep their input order.
    pub fn new(rows: impl IntoIterator<Item = StatDefinition>) -> Self {
        let mut definitions: Vec<StatDefinition> = rows.into_iter().collect();
        definitions.sort_by_key(|definition| definition.order);
        Self { definitions }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl StatOracle for StatTable {
    fn definition(&self, id: &StatId) -> Option<&StatDefinition> {
        self.definitions
            .iter()
            .find(|definition| &definition.id == id)
    }

    fn definitions(&self) -> &[StatDefinition] {
        &self.definitions
    }
}
