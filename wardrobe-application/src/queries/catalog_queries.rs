use crate::AppState;
use wardrobe_domain::{CatalogEntry, GroupSummary, LockDefinition};
use crate::AppError;

#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub text: Option<String>,
    pub group: Option<String>,
    pub extended_only: bool,
    pub lockable_only: bool,
    pub limit: Option<usize>,
}

pub fn search_catalog(state: &AppState, query: CatalogQuery) -> Vec<CatalogEntry> {
    let limit = query.limit.unwrap_or(50).clamp(1, 500);
    let text = query.text.unwrap_or_default();
    state
        .catalog
        .search(&text, query.group.as_deref())
        .into_iter()
        .filter(|entry| !query.extended_only || entry.is_extended())
        .filter(|entry| !query.lockable_only || entry.lockable)
        .take(limit)
        .cloned()
        .collect()
}

pub fn list_groups(state: &AppState) -> Vec<GroupSummary> {
    state.catalog.group_summaries()
}

pub fn list_group(state: &AppState, group: &str) -> Vec<CatalogEntry> {
    state.catalog.list_group(group).into_iter().cloned().collect()
}

pub fn describe_asset(state: &AppState, group: &str, name: &str) -> Result<CatalogEntry, AppError> {
    state
        .catalog
        .lookup(group, name)
        .cloned()
        .ok_or_else(|| AppError::AssetNotFound {
            group: group.to_string(),
            asset: name.to_string(),
        })
}

pub fn list_locks(state: &AppState) -> Vec<LockDefinition> {
    state.locks.list_definitions().to_vec()
}
