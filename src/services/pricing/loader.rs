//! Catalogue snapshot loading
//!
//! The catalogue store is external; the service only ever consumes a
//! materialized JSON snapshot, fetched from a file or an HTTP endpoint.

use super::service::PricingService;
use crate::core::catalog::CatalogSnapshot;
use crate::utils::error::{EngineError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// A source the catalogue snapshot can be loaded from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch and parse a snapshot.
    async fn load(&self) -> Result<CatalogSnapshot>;

    /// Human-readable description for logging.
    fn describe(&self) -> String;
}

/// Loads a snapshot from a local JSON file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn load(&self) -> Result<CatalogSnapshot> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(EngineError::Io)?;

        let snapshot: CatalogSnapshot = serde_json::from_str(&content)
            .map_err(|e| EngineError::parsing(format!("Failed to parse catalogue JSON: {}", e)))?;

        debug!("Loaded catalogue snapshot from {:?}", self.path);
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Loads a snapshot from an HTTP(S) endpoint.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn load(&self) -> Result<CatalogSnapshot> {
        let response = self
            .client
            .get(&self.url)
            .timeout(Duration::from_secs(30))
            .send()
            .await
            .map_err(|e| EngineError::network(format!("Failed to fetch catalogue: {}", e)))?;

        if !response.status().is_success() {
            return Err(EngineError::network(format!(
                "HTTP {}: Failed to fetch catalogue",
                response.status()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| EngineError::network(format!("Failed to read response: {}", e)))?;

        let snapshot: CatalogSnapshot = serde_json::from_str(&text)
            .map_err(|e| EngineError::parsing(format!("Failed to parse catalogue JSON: {}", e)))?;

        debug!("Loaded catalogue snapshot from {}", self.url);
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Pick a source implementation for a file path or HTTP(S) URL.
pub fn source_for(spec: &str) -> Box<dyn CatalogSource> {
    if spec.starts_with("http://") || spec.starts_with("https://") {
        Box::new(HttpSource::new(spec))
    } else {
        Box::new(FileSource::new(spec))
    }
}

impl PricingService {
    /// Load a snapshot from the given source and swap it in.
    pub async fn load_from(&self, source: &dyn CatalogSource) -> Result<()> {
        let snapshot = source.load().await?;

        info!(
            services = snapshot.services.len(),
            licenses = snapshot.licenses.len(),
            configs = snapshot.package_configs.len(),
            "Catalogue snapshot loaded from {}",
            source.describe()
        );

        self.replace_catalog(snapshot);
        Ok(())
    }
}
