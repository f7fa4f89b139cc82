use serde_json::Value;

use crate::AppState;
use crate::AppError;

pub fn import_outfits(state: &mut AppState, text: &str) -> Result<(), AppError> {
    state.store.import_json(text)
}

pub fn reset_store(state: &mut AppState) -> Result<(), AppError> {
    state.store.reset()
}

pub fn update_setting(state: &mut AppState, key: &str, value: Value) -> Result<(), AppError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(AppError::InvalidFormat("setting key is required".to_string()));
    }
    state.store.set_setting(key, value)
}
