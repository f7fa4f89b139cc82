use async_trait::async_trait;

use crate::entities::{CatalogSource, Character};

/// Durable string storage addressed by key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn load_catalog(&self, path: &str) -> anyhow::Result<CatalogSource>;
}

#[async_trait]
pub trait CharacterRepository: Send + Sync {
    async fn load_character(&self, path: &str) -> anyhow::Result<Character>;
    async fn save_character(&self, path: &str, character: &Character) -> anyhow::Result<()>;
}
