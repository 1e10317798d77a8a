//! Catalog error types.

use thiserror::Error;

/// Errors that can occur in catalog operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No deal with the given id.
    #[error("Deal not found: {0}")]
    NotFound(String),

    /// Two deals share the same id.
    #[error("Duplicate deal id: {0}")]
    DuplicateId(String),

    /// Catalog JSON could not be read or written.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}
