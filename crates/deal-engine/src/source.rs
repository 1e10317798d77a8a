//! Catalog sources.

use std::path::PathBuf;

use async_trait::async_trait;
use deal_catalog::catalog::{self, Catalog};

use crate::error::EngineError;

/// Supplies the catalog for a session.
///
/// The reference source is the in-memory seed; a real deployment swaps in a
/// fetching implementation without touching query or upvote logic.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the full catalog.
    async fn load(&self) -> Result<Catalog, EngineError>;

    /// Short description used in logs.
    fn describe(&self) -> String;
}

/// The fixed sample catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSource;

#[async_trait]
impl CatalogSource for SeedSource {
    async fn load(&self) -> Result<Catalog, EngineError> {
        Ok(catalog::initialize())
    }

    fn describe(&self) -> String {
        "seed".to_string()
    }
}

/// A JSON array of deals on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn load(&self) -> Result<Catalog, EngineError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| EngineError::FetchFailure(format!("{}: {}", self.path.display(), e)))?;

        Catalog::from_json(&content)
            .map_err(|e| EngineError::FetchFailure(format!("{}: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
