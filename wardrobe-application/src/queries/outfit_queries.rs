use serde::Serialize;

use crate::AppState;
use wardrobe_domain::{diff_outfits, OutfitChange, OutfitConfig, Settings};
use crate::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitSummary {
    pub name: String,
    pub description: String,
    pub item_count: usize,
    pub saved_at: Option<i64>,
}

pub fn list_outfits(state: &AppState) -> Vec<OutfitSummary> {
    state
        .store
        .outfit_names()
        .into_iter()
        .filter_map(|name| state.store.get_outfit(&name).map(|outfit| (name, outfit)))
        .map(|(name, outfit)| OutfitSummary {
            name,
            description: outfit.description,
            item_count: outfit.items.len(),
            saved_at: outfit.saved_at,
        })
        .collect()
}

pub fn get_outfit(state: &AppState, name: &str) -> Result<OutfitConfig, AppError> {
    state
        .store
        .get_outfit(name)
        .ok_or_else(|| AppError::NotFound(name.to_string()))
}

pub fn diff_stored_outfits(state: &AppState, a: &str, b: &str) -> Result<Vec<OutfitChange>, AppError> {
    let a = get_outfit(state, a)?;
    let b = get_outfit(state, b)?;
    Ok(diff_outfits(&a, &b))
}

pub fn export_outfits(state: &AppState) -> Result<String, AppError> {
    state.store.export_json()
}

pub fn current_settings(state: &AppState) -> Settings {
    state.store.settings()
}
