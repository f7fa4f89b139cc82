// Outfit entities

use serde::{Deserialize, Serialize};

use crate::entities::ItemConfig;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<i64>,
}

impl OutfitConfig {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
            saved_at: None,
        }
    }

    /// Appends `item`, dropping whatever was configured for the same group.
    pub fn upsert_item(&mut self, item: ItemConfig) {
        self.items.retain(|existing| existing.group != item.group);
        self.items.push(item);
    }

    pub fn remove_item(&mut self, group: &str) -> Option<ItemConfig> {
        let index = self.items.iter().position(|item| item.group == group)?;
        Some(self.items.remove(index))
    }

    pub fn item(&self, group: &str) -> Option<&ItemConfig> {
        self.items.iter().find(|item| item.group == group)
    }

    pub fn groups(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.group.as_str()).collect()
    }
}

/// One per-group difference between two outfits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "lowercase")]
pub enum OutfitChange {
    Added { group: String, item: ItemConfig },
    Removed { group: String, item: ItemConfig },
    Changed {
        group: String,
        from: ItemConfig,
        to: ItemConfig,
    },
}

impl OutfitChange {
    pub fn group(&self) -> &str {
        match self {
            OutfitChange::Added { group, .. }
            | OutfitChange::Removed { group, .. }
            | OutfitChange::Changed { group, .. } => group,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutfitChange::Added { .. } => "added",
            OutfitChange::Removed { .. } => "removed",
            OutfitChange::Changed { .. } => "changed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn upsert_keeps_one_item_per_group() {
        let mut outfit = OutfitConfig::new("Evening", "");
        outfit.upsert_item(ItemConfig::new("Hands", "Rope").with_color("Red"));
        outfit.upsert_item(ItemConfig::new("Feet", "Cuffs"));
        outfit.upsert_item(ItemConfig::new("Hands", "Rope").with_color("Blue"));

        assert_eq!(outfit.groups(), vec!["Feet", "Hands"]);
        assert_eq!(
            outfit.item("Hands"),
            Some(&ItemConfig::new("Hands", "Rope").with_color("Blue"))
        );
    }

    #[test]
    fn remove_item_is_noop_for_missing_group() {
        let mut outfit = OutfitConfig::new("Evening", "");
        outfit.upsert_item(ItemConfig::new("Hands", "Rope"));
        assert!(outfit.remove_item("Neck").is_none());
        assert_eq!(outfit.items.len(), 1);
        assert!(outfit.remove_item("Hands").is_some());
        assert!(outfit.items.is_empty());
    }

    #[test]
    fn serializes_with_host_field_names() {
        let mut outfit = OutfitConfig::new("Evening", "night out");
        outfit.upsert_item(
            ItemConfig::new("ItemArms", "HempRope")
                .with_subtype("Hogtied")
                .with_property("Difficulty", 4),
        );
        let value = serde_json::to_value(&outfit).unwrap();
        assert_eq!(value["items"][0]["type"], "Hogtied");
        assert_eq!(value["items"][0]["property"]["Difficulty"], 4);
        assert_eq!(value["items"][0]["lock"]["type"], "None");
        assert!(value.get("savedAt").is_none());
    }
}
