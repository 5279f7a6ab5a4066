use crate::types::DbId;

/// Domain-level error type.
///
/// Store outcomes are tagged so the boundary layer can tell "record does
/// not exist" apart from "storage fault" -- the two carry different
/// user-facing messages.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage failure: {0}")]
    Storage(String),
}
