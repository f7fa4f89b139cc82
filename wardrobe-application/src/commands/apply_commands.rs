use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::AppState;
use wardrobe_domain::{
    property_keys, AssetKey, ColorSpec, EquipRequest, EquippedItem, ItemConfig, LiveTarget,
    LockConfig, OutfitConfig,
};
use crate::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOptions {
    pub strip_first: bool,
    pub apply_locks: bool,
    /// Restricts both the strip and the item loop to these groups.
    pub target_groups: Option<Vec<String>>,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            strip_first: true,
            apply_locks: true,
            target_groups: None,
        }
    }
}

impl ApplyOptions {
    fn allows(&self, group: &str) -> bool {
        self.target_groups
            .as_ref()
            .map_or(true, |groups| groups.iter().any(|g| g == group))
    }
}

/// An outfit to apply: either a stored name or a config in hand.
#[derive(Debug, Clone)]
pub enum OutfitSource {
    Named(String),
    Config(OutfitConfig),
}

impl From<&str> for OutfitSource {
    fn from(name: &str) -> Self {
        OutfitSource::Named(name.to_string())
    }
}

impl From<OutfitConfig> for OutfitSource {
    fn from(config: OutfitConfig) -> Self {
        OutfitSource::Config(config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyReport {
    pub applied_count: usize,
    pub errors: Vec<String>,
}

impl ApplyReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Drives `target` toward `source`. Only outfit resolution can fail; item
/// failures are collected in the report and never stop the remaining items.
pub fn apply_outfit(
    state: &AppState,
    target: &mut dyn LiveTarget,
    source: OutfitSource,
    options: &ApplyOptions,
) -> Result<ApplyReport, AppError> {
    let outfit = match source {
        OutfitSource::Named(name) => state
            .store
            .get_outfit(&name)
            .ok_or(AppError::OutfitNotFound(name))?,
        OutfitSource::Config(config) => config,
    };

    if options.strip_first {
        strip_target(state, target, options);
    }

    let mut total = 0;
    let mut errors = Vec::new();
    for item in outfit.items.iter().filter(|item| options.allows(&item.group)) {
        total += 1;
        if let Err(err) = apply_item(state, target, item, options.apply_locks) {
            errors.push(format!("{}/{}: {}", item.group, item.asset, err));
        }
    }

    if let Some(refresh) = &state.host.refresh {
        if let Err(err) = refresh.refresh(target) {
            warn!(live_target = %target.label(), "refresh failed: {err:#}");
        }
    }

    let report = ApplyReport {
        applied_count: total - errors.len(),
        errors,
    };
    state
        .metrics
        .record_apply(report.applied_count, report.errors.len());
    if report.is_clean() {
        info!(outfit = %outfit.name, applied = report.applied_count, "outfit applied");
    } else {
        warn!(
            outfit = %outfit.name,
            applied = report.applied_count,
            errors = ?report.errors,
            "outfit applied with errors"
        );
    }
    Ok(report)
}

/// Equips one configured item and merges its sub-type, properties, effects
/// and (optionally) lock onto the resulting live item.
pub fn apply_item(
    state: &AppState,
    target: &mut dyn LiveTarget,
    item: &ItemConfig,
    apply_locks: bool,
) -> Result<(), AppError> {
    if !state.catalog.contains(&item.group, &item.asset) {
        return Err(AppError::AssetNotFound {
            group: item.group.clone(),
            asset: item.asset.clone(),
        });
    }

    let color = ColorSpec::resolve(item.color.as_ref());
    let request = EquipRequest {
        asset: &item.asset,
        group: &item.group,
        color: &color,
        difficulty: item.difficulty(),
    };
    match &state.host.equip {
        Some(host) => host.equip(target, &request)?,
        None => splice_equip(target, &request),
    }

    let Some(live) = target.find_item_mut(&item.group, &item.asset) else {
        debug!(asset = %item.key(), "equipped item not present after equip");
        return Ok(());
    };

    if let Some(subtype) = &item.subtype {
        live.properties
            .insert(property_keys::TYPE.to_string(), json!(subtype));
    }
    for (key, value) in &item.properties {
        if property_keys::RESERVED_LOCK_KEYS.contains(&key.as_str()) {
            continue;
        }
        live.properties.insert(key.clone(), value.clone());
    }
    if !item.effects.is_empty() {
        let effects: Vec<Value> = item.effects.iter().map(|e| json!(e)).collect();
        live.properties
            .insert(property_keys::EFFECT.to_string(), Value::Array(effects));
    }

    if apply_locks && !item.lock.is_none() {
        state
            .locks
            .apply(Some(live), &item.lock, state.config.actor.as_ref());
    }
    Ok(())
}

/// Reads the target's current equipment into a new outfit.
pub fn capture_from_live_target(
    state: &AppState,
    target: &dyn LiveTarget,
    name: &str,
    include_locks: bool,
) -> OutfitConfig {
    let mut outfit = OutfitConfig::new(name, "");
    for live in target.equipped() {
        let Some(asset) = &live.asset else {
            debug!("skipping equipped item without an asset reference");
            continue;
        };

        let mut item = ItemConfig::new(&asset.group, &asset.name);
        item.color = live.color.clone();
        item.subtype = live.subtype().map(str::to_string);
        item.properties = live.properties.clone();
        if include_locks {
            item.lock = capture_lock(state, live);
        }
        outfit.upsert_item(item);
    }
    state.metrics.record_capture();
    debug!(outfit = name, items = outfit.items.len(), "outfit captured");
    outfit
}

// Copies the live lock verbatim; an already absolute timer expiry stays absolute.
fn capture_lock(state: &AppState, live: &EquippedItem) -> LockConfig {
    let Some(kind) = state.locks.active_kind(live) else {
        if state.locks.is_locked(Some(live)) {
            warn!(asset = ?live.asset, "live lock kind is not recognised, capturing without lock");
        }
        return LockConfig::none();
    };
    let mut lock = LockConfig::new(kind);
    for key in property_keys::CAPTURED_LOCK_FIELDS {
        if let Some(value) = live.properties.get(key) {
            lock.fields.insert(key.to_string(), value.clone());
        }
    }
    lock
}

fn strip_target(state: &AppState, target: &mut dyn LiveTarget, options: &ApplyOptions) {
    let groups: Vec<&String> = state
        .catalog
        .groups()
        .iter()
        .filter(|group| options.allows(group))
        .collect();

    for group in groups {
        match &state.host.equip {
            Some(host) => {
                if let Err(err) = host.strip(target, group) {
                    warn!(group = %group, "strip failed: {err:#}");
                }
            }
            None => target
                .equipped_mut()
                .retain(|item| item.group() != Some(group.as_str())),
        }
    }
}

// Degraded mode: replace the group's record without host-side validation.
fn splice_equip(target: &mut dyn LiveTarget, request: &EquipRequest<'_>) {
    let entry = EquippedItem::new(
        AssetKey::new(request.group, request.asset),
        request.color.clone(),
    );
    let items = target.equipped_mut();
    match items
        .iter()
        .position(|item| item.group() == Some(request.group))
    {
        Some(index) => items[index] = entry,
        None => items.push(entry),
    }
}
