use std::collections::{BTreeMap, BTreeSet};

use crate::entities::{ItemConfig, OutfitChange, OutfitConfig};

/// Per-group structural comparison of two outfits, ordered by group name.
pub fn diff_outfits(a: &OutfitConfig, b: &OutfitConfig) -> Vec<OutfitChange> {
    let map_a = by_group(a);
    let map_b = by_group(b);
    let groups: BTreeSet<&str> = map_a.keys().chain(map_b.keys()).copied().collect();

    groups
        .into_iter()
        .filter_map(|group| match (map_a.get(group), map_b.get(group)) {
            (None, Some(item)) => Some(OutfitChange::Added {
                group: group.to_string(),
                item: (*item).clone(),
            }),
            (Some(item), None) => Some(OutfitChange::Removed {
                group: group.to_string(),
                item: (*item).clone(),
            }),
            (Some(from), Some(to)) if from != to => Some(OutfitChange::Changed {
                group: group.to_string(),
                from: (*from).clone(),
                to: (*to).clone(),
            }),
            _ => None,
        })
        .collect()
}

fn by_group(outfit: &OutfitConfig) -> BTreeMap<&str, &ItemConfig> {
    // later entries win, matching the one-item-per-group rule
    outfit
        .items
        .iter()
        .map(|item| (item.group.as_str(), item))
        .collect()
}
