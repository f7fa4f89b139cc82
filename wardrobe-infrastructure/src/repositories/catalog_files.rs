use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use tokio::fs;
use tracing::{info, warn};

use wardrobe_domain::{CatalogRepository, CatalogSource};

/// Reads catalog dumps from disk. `.yaml`/`.yml` files are parsed as YAML,
/// everything else as JSON.
pub struct CatalogFileRepository;

impl CatalogFileRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CatalogFileRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false)
}

#[async_trait]
impl CatalogRepository for CatalogFileRepository {
    async fn load_catalog(&self, path: &str) -> anyhow::Result<CatalogSource> {
        let file_path = Path::new(path);
        if !file_path.exists() {
            warn!(path, "catalog file not found, starting with an empty catalog");
            return Ok(CatalogSource::default());
        }
        let content = fs::read_to_string(file_path)
            .await
            .with_context(|| format!("read catalog {path}"))?;
        let source: CatalogSource = if is_yaml(file_path) {
            serde_yaml::from_str(&content).with_context(|| format!("parse catalog {path}"))?
        } else {
            serde_json::from_str(&content).with_context(|| format!("parse catalog {path}"))?
        };
        info!(path, groups = source.groups.len(), "catalog loaded");
        Ok(source)
    }
}
