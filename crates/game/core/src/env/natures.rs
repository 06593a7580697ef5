use super::OracleError;
use crate::ids::NatureId;
use crate::stats::{Nature, nature_index};

/// Oracle providing the ordered nature table.
///
/// Table order is significant: personality-derived natures index into it.
pub trait NatureOracle: Send + Sync {
    fn nature(&self, id: &NatureId) -> Option<&Nature>;

    /// All natures in table order.
    fn natures(&self) -> &[Nature];

    fn nature_ids(&self) -> Vec<NatureId> {
        self.natures().iter().map(|nature| nature.id.clone()).collect()
    }

    /// # Errors
    ///
    /// Returns `OracleError::NatureNotFound` if `id` has no row.
    fn require_nature(&self, id: &NatureId) -> Result<&Nature, OracleError> {
        self.nature(id)
            .ok_or_else(|| OracleError::NatureNotFound(id.clone()))
    }

    /// Nature at `personality_value % table_len`.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::EmptyNatureTable` if the table has no rows.
    fn nature_for_personality(&self, personality_value: u32) -> Result<&Nature, OracleError> {
        let natures = self.natures();
        nature_index(personality_value, natures.len())
            .and_then(|index| natures.get(index))
            .ok_or(OracleError::EmptyNatureTable)
    }
}
