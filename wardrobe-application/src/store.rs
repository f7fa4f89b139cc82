use std::sync::Arc;

use anyhow::Context;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use wardrobe_domain::{current_millis, KeyValueStore, OutfitConfig, Settings, StoreSnapshot};

use crate::AppError;

pub const CURRENT_VERSION: u32 = 1;

type Migration = fn(&mut Value);

/// Ordered migrations; each entry upgrades a raw snapshot to `target` version.
const MIGRATIONS: &[(u32, Migration)] = &[(1, migrate_to_v1)];

// Version 1 is the first shape; older payloads only lack the stamp.
fn migrate_to_v1(_raw: &mut Value) {}

pub fn storage_key(store_id: &str) -> String {
    format!("WARDROBE_{store_id}")
}

/// Versioned outfit and settings storage. Every read hands out an owned copy.
pub struct Store {
    storage: Arc<dyn KeyValueStore>,
    key: String,
    data: StoreSnapshot,
}

impl Store {
    pub fn open(storage: Arc<dyn KeyValueStore>, store_id: &str) -> Self {
        let mut store = Self {
            storage,
            key: storage_key(store_id),
            data: StoreSnapshot::default(),
        };
        store.load();
        store
    }

    /// Re-reads the snapshot, substituting defaults for missing or corrupt data.
    pub fn load(&mut self) {
        let (data, migrated) = read_snapshot(self.storage.as_ref(), &self.key);
        self.data = data;
        if migrated {
            if let Err(err) = self.write(&self.data) {
                warn!(key = %self.key, "failed to persist migrated snapshot: {err:#}");
            }
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn version(&self) -> u32 {
        self.data.version
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.data.clone()
    }

    pub fn outfit_names(&self) -> Vec<String> {
        self.data.outfits.keys().cloned().collect()
    }

    pub fn get_outfit(&self, name: &str) -> Option<OutfitConfig> {
        self.data.outfits.get(name).cloned()
    }

    pub fn save_outfit(&mut self, name: &str, config: &OutfitConfig) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::EmptyName);
        }
        let mut stored = config.clone();
        stored.saved_at = Some(current_millis());
        let mut next = self.data.clone();
        next.outfits.insert(name.to_string(), stored);
        self.commit(next)?;
        debug!(outfit = name, "outfit saved");
        Ok(())
    }

    pub fn rename_outfit(&mut self, old_name: &str, new_name: &str) -> Result<(), AppError> {
        if new_name.trim().is_empty() {
            return Err(AppError::EmptyName);
        }
        if !self.data.outfits.contains_key(old_name) {
            return Err(AppError::NotFound(old_name.to_string()));
        }
        if self.data.outfits.contains_key(new_name) {
            return Err(AppError::NameCollision(new_name.to_string()));
        }
        let mut next = self.data.clone();
        if let Some(mut outfit) = next.outfits.remove(old_name) {
            outfit.name = new_name.to_string();
            next.outfits.insert(new_name.to_string(), outfit);
        }
        self.commit(next)
    }

    pub fn delete_outfit(&mut self, name: &str) -> Result<(), AppError> {
        if !self.data.outfits.contains_key(name) {
            return Ok(());
        }
        let mut next = self.data.clone();
        next.outfits.remove(name);
        self.commit(next)
    }

    pub fn settings(&self) -> Settings {
        self.data.settings.clone()
    }

    pub fn get_setting(&self, key: &str) -> Option<Value> {
        serde_json::to_value(&self.data.settings)
            .ok()
            .and_then(|value| value.get(key).cloned())
    }

    pub fn set_setting(&mut self, key: &str, value: Value) -> Result<(), AppError> {
        let mut incoming = serde_json::Map::new();
        incoming.insert(key.to_string(), value);
        let mut next = self.data.clone();
        next.settings = merge_settings(&self.data.settings, &incoming)?;
        self.commit(next)
    }

    pub fn export_json(&self) -> Result<String, AppError> {
        let text = serde_json::to_string_pretty(&self.data).context("serialize snapshot")?;
        Ok(text)
    }

    /// Merges outfits and settings from an exported payload. Outfits of the
    /// same name are replaced; everything else already stored is kept.
    pub fn import_json(&mut self, text: &str) -> Result<(), AppError> {
        let parsed: Value =
            serde_json::from_str(text).map_err(|err| AppError::InvalidFormat(err.to_string()))?;
        let Some(payload) = parsed.as_object() else {
            return Err(AppError::InvalidFormat("payload must be a JSON object".to_string()));
        };
        let outfits = match payload.get("outfits") {
            Some(value @ Value::Object(_)) => {
                serde_json::from_value::<std::collections::BTreeMap<String, OutfitConfig>>(
                    value.clone(),
                )
                .map_err(|err| AppError::InvalidFormat(format!("outfits: {err}")))?
            }
            _ => {
                return Err(AppError::InvalidFormat(
                    "payload has no outfits object".to_string(),
                ))
            }
        };
        let settings = match payload.get("settings") {
            None | Some(Value::Null) => self.data.settings.clone(),
            Some(Value::Object(incoming)) => merge_settings(&self.data.settings, incoming)?,
            Some(_) => {
                return Err(AppError::InvalidFormat(
                    "settings must be an object".to_string(),
                ))
            }
        };

        let imported = outfits.len();
        let mut next = self.data.clone();
        next.outfits.extend(outfits);
        next.settings = settings;
        self.commit(next)?;
        info!(imported, total = self.data.outfits.len(), "outfits imported");
        Ok(())
    }

    pub fn reset(&mut self) -> Result<(), AppError> {
        self.commit(StoreSnapshot::default())
    }

    /// Writes `next` and only then makes it the in-memory snapshot.
    fn commit(&mut self, next: StoreSnapshot) -> Result<(), AppError> {
        self.write(&next)?;
        self.data = next;
        Ok(())
    }

    fn write(&self, snapshot: &StoreSnapshot) -> anyhow::Result<()> {
        let text = serde_json::to_string(snapshot).context("serialize snapshot")?;
        self.storage
            .set(&self.key, &text)
            .with_context(|| format!("write {}", self.key))
    }
}

fn merge_settings(
    current: &Settings,
    incoming: &serde_json::Map<String, Value>,
) -> Result<Settings, AppError> {
    let mut merged = serde_json::to_value(current).context("serialize settings")?;
    if let Value::Object(fields) = &mut merged {
        for (key, value) in incoming {
            fields.insert(key.clone(), value.clone());
        }
    }
    serde_json::from_value(merged).map_err(|err| AppError::InvalidFormat(format!("settings: {err}")))
}

fn read_snapshot(storage: &dyn KeyValueStore, key: &str) -> (StoreSnapshot, bool) {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return (StoreSnapshot::default(), false),
        Err(err) => {
            warn!(key, "failed to read snapshot, using defaults: {err:#}");
            return (StoreSnapshot::default(), false);
        }
    };

    let mut value: Value = match serde_json::from_str(&raw) {
        Ok(value @ Value::Object(_)) => value,
        Ok(_) => {
            warn!(key, "snapshot is not an object, using defaults");
            return (StoreSnapshot::default(), false);
        }
        Err(err) => {
            warn!(key, "snapshot is malformed, using defaults: {err}");
            return (StoreSnapshot::default(), false);
        }
    };

    let version = value
        .get("version")
        .and_then(Value::as_u64)
        .map(u32::try_from)
        .unwrap_or(Ok(0));
    let Ok(version) = version else {
        warn!(key, "snapshot version is out of range, using defaults");
        return (StoreSnapshot::default(), false);
    };
    let migrated = version < CURRENT_VERSION;
    if migrated {
        for (target, migration) in MIGRATIONS {
            if *target > version {
                migration(&mut value);
            }
        }
        value["version"] = json!(CURRENT_VERSION);
        info!(key, from = version, to = CURRENT_VERSION, "snapshot migrated");
    }

    match serde_json::from_value::<StoreSnapshot>(value) {
        Ok(snapshot) => (snapshot, migrated),
        Err(err) => {
            warn!(key, "snapshot has an unexpected shape, using defaults: {err}");
            (StoreSnapshot::default(), false)
        }
    }
}
