// Runtime configuration handed from the config loader to the application

use crate::value_objects::Actor;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub store_id: String,
    pub data_dir: String,
    pub catalog_path: String,
    pub character_path: String,
    pub actor: Option<Actor>,
    pub strip_first: bool,
    pub apply_locks: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            store_id: "default".to_string(),
            data_dir: "./data".to_string(),
            catalog_path: "./catalog.json".to_string(),
            character_path: "./character.json".to_string(),
            actor: None,
            strip_first: true,
            apply_locks: true,
        }
    }
}
