use std::collections::HashMap;

use tracing::{debug, warn};

use crate::entities::{CatalogEntry, CatalogSource, GroupSummary, SourceAsset};
use crate::value_objects::AssetKey;

/// Read-only index of every equippable definition, grouped by slot.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    groups: Vec<String>,
    by_group: HashMap<String, Vec<usize>>,
    by_key: HashMap<AssetKey, usize>,
}

impl Catalog {
    pub fn build_index(source: &CatalogSource) -> Self {
        let mut catalog = Catalog::default();
        if source.is_empty() {
            warn!("catalog source is empty, every asset lookup will fail");
            return catalog;
        }

        for group in &source.groups {
            if !catalog.by_group.contains_key(&group.name) {
                catalog.groups.push(group.name.clone());
                catalog.by_group.insert(group.name.clone(), Vec::new());
            }
            for asset in &group.asset {
                let Some(name) = asset.name.as_deref().filter(|name| !name.is_empty()) else {
                    debug!(group = %group.name, "skipping unnamed asset");
                    continue;
                };
                let entry = build_entry(source, &group.name, name, asset);
                catalog.insert(entry);
            }
        }

        debug!(
            assets = catalog.entries.len(),
            groups = catalog.groups.len(),
            "catalog indexed"
        );
        catalog
    }

    fn insert(&mut self, entry: CatalogEntry) {
        let key = entry.key();
        if let Some(&index) = self.by_key.get(&key) {
            self.entries[index] = entry;
            return;
        }
        let index = self.entries.len();
        self.by_group
            .entry(entry.group.clone())
            .or_default()
            .push(index);
        self.by_key.insert(key, index);
        self.entries.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn lookup(&self, group: &str, name: &str) -> Option<&CatalogEntry> {
        self.by_key
            .get(&AssetKey::new(group, name))
            .map(|&index| &self.entries[index])
    }

    pub fn contains(&self, group: &str, name: &str) -> bool {
        self.lookup(group, name).is_some()
    }

    pub fn list_group(&self, group: &str) -> Vec<&CatalogEntry> {
        self.by_group
            .get(group)
            .map(|indices| indices.iter().map(|&i| &self.entries[i]).collect())
            .unwrap_or_default()
    }

    pub fn search(&self, text: &str, group_filter: Option<&str>) -> Vec<&CatalogEntry> {
        let query = text.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|entry| group_filter.map_or(true, |group| entry.group == group))
            .filter(|entry| {
                query.is_empty()
                    || entry.name.to_lowercase().contains(&query)
                    || entry.group.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn flatten(&self) -> Vec<&CatalogEntry> {
        self.entries.iter().collect()
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn group_summaries(&self) -> Vec<GroupSummary> {
        self.groups
            .iter()
            .map(|name| GroupSummary {
                name: name.clone(),
                count: self.by_group.get(name).map(Vec::len).unwrap_or(0),
            })
            .collect()
    }

    pub fn extended_entries(&self, group_filter: Option<&str>) -> Vec<&CatalogEntry> {
        self.search("", group_filter)
            .into_iter()
            .filter(|entry| entry.is_extended())
            .collect()
    }

    pub fn lockable_entries(&self, group_filter: Option<&str>) -> Vec<&CatalogEntry> {
        self.search("", group_filter)
            .into_iter()
            .filter(|entry| entry.lockable)
            .collect()
    }
}

fn build_entry(source: &CatalogSource, group: &str, name: &str, asset: &SourceAsset) -> CatalogEntry {
    let extended_option_names = source
        .extended_options
        .get(&format!("{group}{name}"))
        .or_else(|| source.extended_options.get(name))
        .map(|options| options.option_names())
        .unwrap_or_default();

    CatalogEntry {
        group: group.to_string(),
        name: name.to_string(),
        description: asset.description.clone().unwrap_or_default(),
        extended_option_names,
        allowed_colors: asset.color.clone().unwrap_or_default(),
        lockable: asset.allow_lock != Some(false),
        layer_count: asset.layer.len(),
    }
}
