use tracing::warn;

use crate::AppState;
use wardrobe_domain::{ItemConfig, LockConfig, OutfitConfig, PropertyBag};
use crate::AppError;

pub fn create_outfit(name: &str, description: &str) -> OutfitConfig {
    OutfitConfig::new(name, description)
}

/// Adds `item` after checking it against the catalog. Any item already
/// configured for the same group is replaced.
pub fn add_item(state: &AppState, outfit: &mut OutfitConfig, item: ItemConfig) -> Result<(), AppError> {
    let Some(entry) = state.catalog.lookup(&item.group, &item.asset) else {
        return Err(AppError::AssetNotFound {
            group: item.group,
            asset: item.asset,
        });
    };
    if let Some(subtype) = &item.subtype {
        if !entry.extended_option_names.iter().any(|option| option == subtype) {
            warn!(asset = %entry.key(), subtype, "sub-type is not one of the asset's options");
        }
    }
    outfit.upsert_item(item);
    Ok(())
}

pub fn remove_item(outfit: &mut OutfitConfig, group: &str) {
    outfit.remove_item(group);
}

pub fn build_lock(
    state: &AppState,
    kind: &str,
    overrides: Option<&PropertyBag>,
) -> Result<LockConfig, AppError> {
    Ok(state.locks.create_config(kind, overrides)?)
}

pub fn save_outfit(state: &mut AppState, outfit: &OutfitConfig) -> Result<(), AppError> {
    state.store.save_outfit(&outfit.name, outfit)
}

pub fn rename_outfit(state: &mut AppState, old_name: &str, new_name: &str) -> Result<(), AppError> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(AppError::EmptyName);
    }
    state.store.rename_outfit(old_name, new_name)
}

pub fn delete_outfit(state: &mut AppState, name: &str) -> Result<(), AppError> {
    state.store.delete_outfit(name)
}
