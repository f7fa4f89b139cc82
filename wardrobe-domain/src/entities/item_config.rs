// Item config entity: one slot's desired state within an outfit

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::{LockConfig, PropertyBag};
use crate::value_objects::{property_keys, AssetKey, ColorSpec};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub group: String,
    pub asset: String,
    #[serde(default)]
    pub color: Option<ColorSpec>,
    #[serde(default, rename = "type")]
    pub subtype: Option<String>,
    #[serde(default, rename = "property")]
    pub properties: PropertyBag,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub effects: BTreeSet<String>,
    #[serde(default)]
    pub lock: LockConfig,
}

impl ItemConfig {
    pub fn new(group: impl Into<String>, asset: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            asset: asset.into(),
            color: None,
            subtype: None,
            properties: PropertyBag::new(),
            effects: BTreeSet::new(),
            lock: LockConfig::none(),
        }
    }

    pub fn with_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effects.insert(effect.into());
        self
    }

    pub fn with_lock(mut self, lock: LockConfig) -> Self {
        self.lock = lock;
        self
    }

    pub fn key(&self) -> AssetKey {
        AssetKey::new(&self.group, &self.asset)
    }

    /// Difficulty handed to the equip primitive; 0 when absent or not numeric.
    pub fn difficulty(&self) -> i64 {
        match self.properties.get(property_keys::DIFFICULTY) {
            Some(value) => value
                .as_i64()
                .or_else(|| value.as_f64().map(|f| f.round() as i64))
                .unwrap_or(0),
            None => 0,
        }
    }
}
