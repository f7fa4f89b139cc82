// Settings and store snapshot entities

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::{OutfitConfig, PropertyBag};

pub const INITIAL_SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub auto_apply_on_login: bool,
    pub default_outfit: Option<String>,
    pub show_asset_info: bool,
    pub scan_on_startup: bool,
    /// Flags this version does not know about, kept so exports stay lossless.
    #[serde(flatten)]
    pub extra: PropertyBag,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_apply_on_login: false,
            default_outfit: None,
            show_asset_info: true,
            scan_on_startup: true,
            extra: PropertyBag::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub version: u32,
    #[serde(default)]
    pub outfits: BTreeMap<String, OutfitConfig>,
    #[serde(default)]
    pub settings: Settings,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            version: INITIAL_SNAPSHOT_VERSION,
            outfits: BTreeMap::new(),
            settings: Settings::default(),
        }
    }
}
