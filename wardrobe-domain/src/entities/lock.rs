// Lock definition and lock config entities

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::PropertyBag;
use crate::value_objects::LockKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Number,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockField {
    pub key: String,
    pub label: String,
    pub value_type: FieldType,
    pub default: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockDefinition {
    pub kind: LockKind,
    pub label: String,
    pub property_template: PropertyBag,
    pub configurable_fields: Vec<LockField>,
}

impl LockDefinition {
    pub fn field(&self, key: &str) -> Option<&LockField> {
        self.configurable_fields.iter().find(|field| field.key == key)
    }
}

/// A lock choice on one item: the kind plus its configurable field values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LockConfig {
    #[serde(rename = "type", default)]
    pub kind: LockKind,
    #[serde(flatten)]
    pub fields: PropertyBag,
}

impl LockConfig {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(kind: LockKind) -> Self {
        Self {
            kind,
            fields: PropertyBag::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_none(&self) -> bool {
        self.kind.is_none()
    }
}
