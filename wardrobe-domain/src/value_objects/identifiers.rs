// Identifier value objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a catalog entry: slot group plus asset name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetKey {
    pub group: String,
    pub name: String,
}

impl AssetKey {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.name)
    }
}

/// The member who performs a lock; recorded on locked items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    pub member_number: i64,
}

impl Actor {
    pub fn new(member_number: i64) -> Self {
        Self { member_number }
    }
}
