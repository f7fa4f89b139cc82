// Catalog entities: the host's raw asset tables and the indexed entry built from them

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value_objects::AssetKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub group: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub extended_option_names: Vec<String>,
    #[serde(default)]
    pub allowed_colors: Vec<String>,
    pub lockable: bool,
    pub layer_count: usize,
}

impl CatalogEntry {
    pub fn key(&self) -> AssetKey {
        AssetKey::new(&self.group, &self.name)
    }

    pub fn is_extended(&self) -> bool {
        !self.extended_option_names.is_empty()
    }

    /// An empty color list means every color is allowed.
    pub fn allows_color(&self, color: &str) -> bool {
        self.allowed_colors.is_empty() || self.allowed_colors.iter().any(|c| c == color)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub name: String,
    pub count: usize,
}

/// A raw item definition as the host exposes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceAsset {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<Vec<String>>,
    #[serde(default)]
    pub allow_lock: Option<bool>,
    #[serde(default)]
    pub layer: Vec<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceGroup {
    pub name: String,
    #[serde(default)]
    pub asset: Vec<SourceAsset>,
}

/// Per-item extended options; each option is a `{Name}` / `{Value}` record or a bare string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceOptions {
    #[serde(default)]
    pub options: Vec<Value>,
}

impl SourceOptions {
    pub fn option_names(&self) -> Vec<String> {
        self.options
            .iter()
            .filter_map(|option| match option {
                Value::String(name) => Some(name.clone()),
                Value::Object(fields) => fields
                    .get("Name")
                    .or_else(|| fields.get("Value"))
                    .and_then(|value| match value {
                        Value::String(s) => Some(s.clone()),
                        Value::Null => None,
                        other => Some(other.to_string()),
                    }),
                _ => None,
            })
            .collect()
    }
}

/// Everything the host hands over to build a catalog index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSource {
    #[serde(default)]
    pub groups: Vec<SourceGroup>,
    /// Side table keyed by `<group><name>`, or by `<name>` alone.
    #[serde(default)]
    pub extended_options: HashMap<String, SourceOptions>,
}

impl CatalogSource {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
