use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use wardrobe_application::{AppState, Store};
use wardrobe_domain::{Catalog, CatalogRepository, Character, CharacterRepository};
use wardrobe_infrastructure::{
    AppConfig, CatalogFileRepository, CharacterFileRepository, FileKeyValueStore,
};

pub struct AppContext {
    pub state: AppState,
    pub characters: Arc<dyn CharacterRepository>,
    character_path: String,
}

impl AppContext {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();

        let catalog_repo = CatalogFileRepository::new();
        let source = catalog_repo.load_catalog(&runtime_config.catalog_path).await?;
        let catalog = Catalog::build_index(&source);

        let storage = Arc::new(FileKeyValueStore::new(&runtime_config.data_dir));
        let store = Store::open(storage, &runtime_config.store_id);
        info!(
            store = store.key(),
            assets = catalog.len(),
            outfits = store.outfit_names().len(),
            "wardrobe context ready"
        );

        let character_path = runtime_config.character_path.clone();
        Ok(Self {
            state: AppState::new(runtime_config, catalog, store),
            characters: Arc::new(CharacterFileRepository::new()),
            character_path,
        })
    }

    pub fn with_character_path(mut self, path: impl Into<String>) -> Self {
        self.character_path = path.into();
        self
    }

    pub fn character_path(&self) -> &str {
        &self.character_path
    }

    pub async fn load_character(&self) -> Result<Character> {
        self.characters.load_character(&self.character_path).await
    }

    pub async fn save_character(&self, character: &Character) -> Result<()> {
        self.characters
            .save_character(&self.character_path, character)
            .await
    }
}
