//! Configuration management for the pricing engine
//!
//! Handles loading and validation of the engine configuration: the tier
//! ladder, the reference markup used by the cost-analysis view, and the
//! display currency.

use crate::core::tiers::{PackageLadder, normalize_tier_name};
use crate::utils::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Engine configuration
    pub engine: EngineConfig,
}

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Canonical tier ladder, lowest tier first
    #[serde(default = "default_tier_levels")]
    pub tier_levels: Vec<String>,
    /// Markup percentage the cost-analysis view applies to EK totals
    #[serde(default = "default_reference_markup")]
    pub reference_markup_percent: f64,
    /// Display currency
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Default catalogue snapshot source (file path or HTTP URL)
    #[serde(default)]
    pub catalog_source: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tier_levels: default_tier_levels(),
            reference_markup_percent: default_reference_markup(),
            currency: default_currency(),
            catalog_source: None,
        }
    }
}

impl EngineConfig {
    /// Build the tier ladder from the configured levels.
    pub fn ladder(&self) -> PackageLadder {
        PackageLadder::new(&self.tier_levels)
    }
}

fn default_tier_levels() -> Vec<String> {
    ["basis", "gold", "allin", "allin_black"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_reference_markup() -> f64 {
    20.0
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| EngineError::config(format!("Failed to read config file: {}", e)))?;

        let engine: EngineConfig = serde_yaml::from_str(&content)
            .map_err(|e| EngineError::config(format!("Failed to parse config: {}", e)))?;

        let config = Self { engine };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut engine = EngineConfig::default();

        if let Ok(levels) = std::env::var("PAKETKALK_TIER_LEVELS") {
            engine.tier_levels = levels
                .split(',')
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty())
                .collect();
        }
        if let Ok(markup) = std::env::var("PAKETKALK_REFERENCE_MARKUP_PERCENT") {
            engine.reference_markup_percent = markup.parse().map_err(|e| {
                EngineError::config(format!("Invalid PAKETKALK_REFERENCE_MARKUP_PERCENT: {}", e))
            })?;
        }
        if let Ok(currency) = std::env::var("PAKETKALK_CURRENCY") {
            engine.currency = currency;
        }
        if let Ok(source) = std::env::var("PAKETKALK_CATALOG_SOURCE") {
            engine.catalog_source = Some(source);
        }

        let config = Self { engine };
        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        if self.engine.tier_levels.is_empty() {
            return Err(EngineError::config("tier_levels must not be empty"));
        }

        let mut seen = HashSet::new();
        for level in &self.engine.tier_levels {
            let normalized = normalize_tier_name(level);
            if normalized.is_empty() {
                return Err(EngineError::config("tier_levels must not contain blank names"));
            }
            if !seen.insert(normalized.clone()) {
                return Err(EngineError::config(format!(
                    "duplicate tier level: {}",
                    normalized
                )));
            }
        }

        if !self.engine.reference_markup_percent.is_finite()
            || self.engine.reference_markup_percent < 0.0
        {
            return Err(EngineError::config(
                "reference_markup_percent must be a non-negative number",
            ));
        }

        if self.engine.currency.trim().is_empty() {
            return Err(EngineError::config("currency must not be empty"));
        }

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.engine)
            .map_err(|e| EngineError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
