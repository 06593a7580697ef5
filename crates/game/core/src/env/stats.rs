use super::OracleError;
use crate::ids::StatId;
use crate::stats::{StatDefinition, StatKind};

/// Oracle providing the stat table and each stat's classification.
pub trait StatOracle: Send + Sync {
    fn definition(&self, id: &StatId) -> Option<&StatDefinition>;

    /// All stats in table order.
    fn definitions(&self) -> &[StatDefinition];

    /// # Errors
    ///
    /// Returns `OracleError::StatNotFound` if `id` has no row.
    fn kind(&self, id: &StatId) -> Result<StatKind, OracleError> {
        self.definition(id)
            .map(|definition| definition.kind)
            .ok_or_else(|| OracleError::StatNotFound(id.clone()))
    }

    /// Stats tracked by a stat block (Main and MainBattle), in table order.
    fn main_stats(&self) -> Vec<&StatDefinition> {
        self.definitions()
            .iter()
            .filter(|definition| definition.is_main_stat())
            .collect()
    }
}
