use crate::types::DbId;

/// Domain failures shared by the storage and HTTP layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row of kind `entity` has this id (never created or already deleted).
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input that passed deserialization but breaks a domain rule.
    #[error("Invalid input: {0}")]
    Validation(String),
}
