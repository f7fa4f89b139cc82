// Color value object

use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "Default";

/// A single color token, or one token per layer for multi-layer items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    Layers(Vec<String>),
}

impl ColorSpec {
    /// Normalizes a color for the equip primitive. A single token holding a
    /// JSON array is expanded into layers; an unparsable one falls back to the
    /// default token.
    pub fn resolve(color: Option<&ColorSpec>) -> ColorSpec {
        match color {
            None => ColorSpec::Single(DEFAULT_COLOR.to_string()),
            Some(ColorSpec::Single(token)) if token.trim_start().starts_with('[') => {
                match serde_json::from_str::<Vec<String>>(token) {
                    Ok(layers) => ColorSpec::Layers(layers),
                    Err(_) => ColorSpec::Single(DEFAULT_COLOR.to_string()),
                }
            }
            Some(other) => other.clone(),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(s: &str) -> Self {
        ColorSpec::Single(s.to_string())
    }
}
