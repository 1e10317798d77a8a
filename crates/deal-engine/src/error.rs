//! Engine error types.

use deal_catalog::CatalogError;

/// Errors surfaced by the listing engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The catalog source could not deliver a catalog.
    #[error("Failed to fetch deals: {0}")]
    FetchFailure(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
