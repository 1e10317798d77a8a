//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use deal_engine::{CatalogSource, DealListing, JsonFileSource, SeedSource};

use crate::config::DealsConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: DealsConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Config file in use, if any.
    pub config_path: Option<PathBuf>,
    /// Catalog file override from the command line.
    catalog_override: Option<String>,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&str>,
        catalog_override: Option<String>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (DealsConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (DealsConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
            catalog_override,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(DealsConfig, PathBuf)> {
        let config_names = ["deals.toml", ".deals.toml", "deals.config.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = DealsConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// The catalog source selected by flag, then config, then the seed.
    pub fn catalog_source(&self) -> Arc<dyn CatalogSource> {
        let path = self
            .catalog_override
            .as_deref()
            .or(self.config.catalog.path.as_deref());

        let source: Arc<dyn CatalogSource> = match path {
            Some(path) => Arc::new(JsonFileSource::new(self.resolve_path(path))),
            None => Arc::new(SeedSource),
        };
        tracing::debug!(source = %source.describe(), "selected catalog source");
        source
    }

    /// Create a listing engine and wait for its first publication.
    pub async fn start_listing(&self) -> DealListing {
        let mut listing = DealListing::new(self.catalog_source(), self.config.listing_config());
        listing.start();
        self.settle(&mut listing, "Loading deals...").await;
        listing
    }

    /// Wait for a pending query while showing a spinner.
    pub async fn settle(&self, listing: &mut DealListing, msg: &str) {
        if !listing.is_loading() {
            return;
        }
        let spinner = self.output.spinner(msg);
        listing.settle().await;
        spinner.finish_and_clear();
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Where `config init` writes.
    pub fn default_config_path(&self) -> PathBuf {
        self.config_path
            .clone()
            .unwrap_or_else(|| self.cwd.join("deals.toml"))
    }
}
