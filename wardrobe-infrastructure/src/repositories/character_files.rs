use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use tokio::fs;

use wardrobe_domain::{Character, CharacterRepository};

/// Character snapshots stored as pretty JSON documents.
pub struct CharacterFileRepository;

impl CharacterFileRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CharacterFileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CharacterRepository for CharacterFileRepository {
    async fn load_character(&self, path: &str) -> anyhow::Result<Character> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("read character {path}"))?;
        let character: Character =
            serde_json::from_str(&content).with_context(|| format!("parse character {path}"))?;
        Ok(character)
    }

    async fn save_character(&self, path: &str, character: &Character) -> anyhow::Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(character)?;
        fs::write(path, content)
            .await
            .with_context(|| format!("write character {path}"))?;
        Ok(())
    }
}
