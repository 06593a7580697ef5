use super::OracleError;
use crate::ids::TypeId;
use crate::types::TypeData;

/// Oracle providing per-type match-up lists.
pub trait TypeOracle: Send + Sync {
    fn type_data(&self, id: &TypeId) -> Option<&TypeData>;

    /// Every type id, in ascending order.
    fn type_ids(&self) -> Vec<TypeId>;

    /// # Errors
    ///
    /// Returns `OracleError::TypeNotFound` if `id` has no row.
    fn require_type(&self, id: &TypeId) -> Result<&TypeData, OracleError> {
        self.type_data(id)
            .ok_or_else(|| OracleError::TypeNotFound(id.clone()))
    }
}
