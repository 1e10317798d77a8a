//! CLI configuration.

use anyhow::{bail, Context, Result};
use deal_engine::ListingConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DealsConfig {
    /// Engine settings.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl DealsConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Check values that parse but make no sense.
    pub fn validate(&self) -> Result<()> {
        if self.display.description_limit == 0 {
            bail!("display.description_limit must be greater than zero");
        }
        if self.display.date_format.trim().is_empty() {
            bail!("display.date_format must not be empty");
        }
        if let Some(path) = &self.catalog.path {
            if path.trim().is_empty() {
                bail!("catalog.path must not be empty when set");
            }
        }
        Ok(())
    }

    /// Engine configuration derived from this file.
    pub fn listing_config(&self) -> ListingConfig {
        ListingConfig::from_millis(self.engine.latency_ms)
    }
}

/// Engine settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Simulated latency before a query result is shown.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_latency_ms() -> u64 {
    500
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

/// Catalog source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// JSON file with deals. The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Descriptions longer than this many characters are cut short.
    #[serde(default = "default_description_limit")]
    pub description_limit: usize,

    /// chrono format string for end dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_description_limit() -> usize {
    100
}

fn default_date_format() -> String {
    "%-d %B %Y".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            description_limit: default_description_limit(),
            date_format: default_date_format(),
        }
    }
}

/// Generate a default deals.toml config file.
pub fn generate_default_config() -> String {
    r#"# Deals CLI configuration

[engine]
# Simulated round-trip before results are shown
latency_ms = 500

[catalog]
# path = "deals.json"

[display]
description_limit = 100
date_format = "%-d %B %Y"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips() {
        let parsed = DealsConfig::parse("deals.toml", &generate_default_config()).unwrap();
        assert_eq!(parsed, DealsConfig::default());
        parsed.validate().unwrap();
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed = DealsConfig::parse("deals.toml", "[engine]\nlatency_ms = 20\n").unwrap();
        assert_eq!(parsed.engine.latency_ms, 20);
        assert_eq!(parsed.display.description_limit, 100);
        assert_eq!(parsed.catalog.path, None);
        assert_eq!(
            parsed.listing_config().latency,
            std::time::Duration::from_millis(20)
        );
    }

    #[test]
    fn test_json_config() {
        let parsed =
            DealsConfig::parse("deals.config.json", r#"{"catalog": {"path": "deals.json"}}"#).unwrap();
        assert_eq!(parsed.catalog.path.as_deref(), Some("deals.json"));
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let mut config = DealsConfig::default();
        config.display.description_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deals.toml");
        let path = path.to_str().unwrap();

        let mut config = DealsConfig::default();
        config.engine.latency_ms = 0;
        config.save(path).unwrap();

        assert_eq!(DealsConfig::load(path).unwrap(), config);
    }
}
