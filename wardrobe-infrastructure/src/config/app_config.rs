use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use wardrobe_domain::{Actor, RuntimeConfig};

use super::validation::{validate_member_number, validate_store_id};

pub const CONFIG_ENV: &str = "WARDROBE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "./wardrobe.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub store_id: String,
    pub data_dir: String,
    pub catalog_path: String,
    pub character_path: String,
    pub actor_member_number: Option<i64>,
    pub strip_first: bool,
    pub apply_locks: bool,
    pub log_level: Option<String>,
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_id: "default".to_string(),
            data_dir: "./data".to_string(),
            catalog_path: "./catalog.json".to_string(),
            character_path: "./character.json".to_string(),
            actor_member_number: None,
            strip_first: true,
            apply_locks: true,
            log_level: None,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads the config named by `WARDROBE_CONFIG` (or `./wardrobe.toml`).
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path).await
    }

    pub async fn load_from(path: &str) -> Result<Self> {
        let file_path = Path::new(path);
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            toml::from_str(&content).map_err(|err| anyhow!("invalid {}: {}", path, err))?
        } else {
            warn!(path, "config file not found, using defaults");
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        self.store_id = self.store_id.trim().to_string();
        if let Some(level) = &self.log_level {
            if level.trim().is_empty() {
                self.log_level = None;
            }
        }
        if let Some(dir) = &self.log_dir {
            if dir.trim().is_empty() {
                self.log_dir = None;
            }
        }
        if let Some(member) = self.actor_member_number {
            if member <= 0 {
                warn!(member, "ignoring non-positive actor_member_number");
                self.actor_member_number = None;
            }
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.data_dir = resolve_path(base, &self.data_dir);
        self.catalog_path = resolve_path(base, &self.catalog_path);
        self.character_path = resolve_path(base, &self.character_path);
        if let Some(dir) = &self.log_dir {
            self.log_dir = Some(resolve_path(base, dir));
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_store_id(&self.store_id)?;
        if self.data_dir.trim().is_empty() {
            return Err(anyhow!("data_dir must not be empty"));
        }
        if self.catalog_path.trim().is_empty() {
            return Err(anyhow!("catalog_path must not be empty"));
        }
        if let Some(member) = self.actor_member_number {
            validate_member_number(member)?;
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            store_id: self.store_id.clone(),
            data_dir: self.data_dir.clone(),
            catalog_path: self.catalog_path.clone(),
            character_path: self.character_path.clone(),
            actor: self.actor_member_number.map(Actor::new),
            strip_first: self.strip_first,
            apply_locks: self.apply_locks,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("WARDROBE_STORE_ID") {
            self.store_id = value;
        }
        if let Ok(value) = env::var("WARDROBE_DATA_DIR") {
            self.data_dir = value;
        }
        if let Ok(value) = env::var("WARDROBE_CATALOG") {
            self.catalog_path = value;
        }
        if let Ok(value) = env::var("WARDROBE_CHARACTER") {
            self.character_path = value;
        }
        if let Ok(value) = env::var("WARDROBE_ACTOR") {
            self.actor_member_number = value.trim().parse().ok();
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
