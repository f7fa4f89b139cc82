// Live character entities

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ports::LiveTarget;
use crate::value_objects::{property_keys, AssetKey, ColorSpec};

/// Open key/value property bag carried by equipped items and item configs.
pub type PropertyBag = Map<String, Value>;

/// One record of a target's equipped collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EquippedItem {
    #[serde(default)]
    pub asset: Option<AssetKey>,
    #[serde(default)]
    pub color: Option<ColorSpec>,
    #[serde(default, rename = "property")]
    pub properties: PropertyBag,
}

impl EquippedItem {
    pub fn new(asset: AssetKey, color: ColorSpec) -> Self {
        Self {
            asset: Some(asset),
            color: Some(color),
            properties: PropertyBag::new(),
        }
    }

    pub fn group(&self) -> Option<&str> {
        self.asset.as_ref().map(|asset| asset.group.as_str())
    }

    pub fn is_asset(&self, group: &str, name: &str) -> bool {
        self.asset
            .as_ref()
            .map(|asset| asset.group == group && asset.name == name)
            .unwrap_or(false)
    }

    pub fn subtype(&self) -> Option<&str> {
        self.properties
            .get(property_keys::TYPE)
            .and_then(Value::as_str)
    }
}

/// A character as the host persists it: identity plus its appearance list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub member_number: Option<i64>,
    #[serde(default)]
    pub appearance: Vec<EquippedItem>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn item(&self, group: &str) -> Option<&EquippedItem> {
        self.appearance
            .iter()
            .find(|item| item.group() == Some(group))
    }
}

impl LiveTarget for Character {
    fn label(&self) -> String {
        if self.name.is_empty() {
            "character".to_string()
        } else {
            self.name.clone()
        }
    }

    fn equipped(&self) -> &[EquippedItem] {
        &self.appearance
    }

    fn equipped_mut(&mut self) -> &mut Vec<EquippedItem> {
        &mut self.appearance
    }
}
