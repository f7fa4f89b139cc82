#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use serde_json::json;
use wardrobe_application::{AppState, Store};
use wardrobe_domain::{
    AssetKey, Catalog, CatalogSource, Character, EquipPrimitives, EquipRequest, EquippedItem,
    KeyValueStore, LiveTarget, RefreshPrimitive, RuntimeConfig, SourceAsset, SourceGroup,
    SourceOptions,
};

#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    pub fail_writes: bool,
}

impl MemoryStorage {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.fail_writes {
            return Err(anyhow!("disk full"));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Host double recording every primitive call.
#[derive(Default)]
pub struct RecordingHost {
    pub calls: Mutex<Vec<String>>,
    pub failing_assets: Vec<String>,
}

impl RecordingHost {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl EquipPrimitives for RecordingHost {
    fn equip(&self, target: &mut dyn LiveTarget, request: &EquipRequest<'_>) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(format!(
            "equip {}/{} difficulty={}",
            request.group, request.asset, request.difficulty
        ));
        if self.failing_assets.iter().any(|a| a == request.asset) {
            return Err(anyhow!("host refused {}", request.asset));
        }
        let items = target.equipped_mut();
        items.retain(|item| item.group() != Some(request.group));
        items.push(EquippedItem::new(
            AssetKey::new(request.group, request.asset),
            request.color.clone(),
        ));
        Ok(())
    }

    fn strip(&self, target: &mut dyn LiveTarget, group: &str) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(format!("strip {group}"));
        target
            .equipped_mut()
            .retain(|item| item.group() != Some(group));
        Ok(())
    }
}

impl RefreshPrimitive for RecordingHost {
    fn refresh(&self, target: &mut dyn LiveTarget) -> anyhow::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("refresh {}", target.label()));
        Ok(())
    }
}

fn asset(name: &str, colors: &[&str]) -> SourceAsset {
    SourceAsset {
        name: Some(name.to_string()),
        color: Some(colors.iter().map(|c| c.to_string()).collect()),
        ..SourceAsset::default()
    }
}

pub fn catalog() -> Catalog {
    let mut source = CatalogSource {
        groups: vec![
            SourceGroup {
                name: "Hands".to_string(),
                asset: vec![asset("Rope", &["Red", "Blue"]), asset("Mittens", &[])],
            },
            SourceGroup {
                name: "Feet".to_string(),
                asset: vec![asset("Cuffs", &[])],
            },
            SourceGroup {
                name: "Neck".to_string(),
                asset: vec![asset("Collar", &[])],
            },
            SourceGroup {
                name: "ItemArms".to_string(),
                asset: vec![asset("HempRope", &[])],
            },
        ],
        ..CatalogSource::default()
    };
    source.extended_options.insert(
        "ItemArmsHempRope".to_string(),
        SourceOptions {
            options: vec![json!({"Name": "Hogtied"}), json!({"Name": "BoxTie"})],
        },
    );
    Catalog::build_index(&source)
}

pub fn state() -> AppState {
    state_with_storage(Arc::new(MemoryStorage::default()))
}

pub fn state_with_storage(storage: Arc<MemoryStorage>) -> AppState {
    let store = Store::open(storage, "test");
    AppState::new(RuntimeConfig::default(), catalog(), store)
}

pub fn character(items: Vec<EquippedItem>) -> Character {
    Character {
        name: "Alice".to_string(),
        member_number: Some(100),
        appearance: items,
    }
}
