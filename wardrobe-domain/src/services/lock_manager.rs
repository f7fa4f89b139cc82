use serde_json::{json, Value};
use tracing::debug;

use crate::entities::{EquippedItem, FieldType, LockConfig, LockDefinition, LockField, PropertyBag};
use crate::error::DomainError;
use crate::utils::current_seconds;
use crate::value_objects::{property_keys as keys, Actor, LockKind};

const DEFAULT_TIMER_SECONDS: i64 = 3600;

/// Static catalog of lock kinds plus the operations that lock/unlock an item.
#[derive(Debug, Clone)]
pub struct LockManager {
    definitions: Vec<LockDefinition>,
}

impl Default for LockManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LockManager {
    pub fn new() -> Self {
        let definitions = LockKind::ALL.iter().map(|&kind| define(kind)).collect();
        Self { definitions }
    }

    /// Every lock kind, "no lock" first.
    pub fn list_definitions(&self) -> &[LockDefinition] {
        &self.definitions
    }

    pub fn definition(&self, kind: LockKind) -> &LockDefinition {
        // definitions are built from LockKind::ALL in declaration order
        &self.definitions[kind as usize]
    }

    pub fn create_config(
        &self,
        kind: &str,
        overrides: Option<&PropertyBag>,
    ) -> Result<LockConfig, DomainError> {
        let kind: LockKind = kind.parse()?;
        let mut config = LockConfig::new(kind);
        for field in &self.definition(kind).configurable_fields {
            let value = overrides
                .and_then(|values| values.get(&field.key))
                .cloned()
                .unwrap_or_else(|| field.default.clone());
            config.fields.insert(field.key.clone(), value);
        }
        Ok(config)
    }

    pub fn apply(&self, item: Option<&mut EquippedItem>, config: &LockConfig, actor: Option<&Actor>) {
        self.apply_at(item, config, actor, current_seconds());
    }

    /// Locks `item` as of `now` (unix seconds).
    pub fn apply_at(
        &self,
        item: Option<&mut EquippedItem>,
        config: &LockConfig,
        actor: Option<&Actor>,
        now: i64,
    ) {
        let Some(item) = item else {
            return;
        };
        if config.kind.is_none() {
            return;
        }

        let definition = self.definition(config.kind);
        let properties = &mut item.properties;
        for (key, value) in &definition.property_template {
            properties.insert(key.clone(), value.clone());
        }
        for field in &definition.configurable_fields {
            if let Some(value) = config.field(&field.key) {
                properties.insert(field.key.clone(), value.clone());
            }
        }

        if config.kind.is_timer() {
            let duration = config
                .field(keys::REMOVE_TIMER)
                .and_then(as_seconds)
                .unwrap_or(DEFAULT_TIMER_SECONDS);
            let expiry = now.saturating_add(duration);
            properties.insert(keys::REMOVE_TIMER.to_string(), json!(expiry));
        }

        if let Some(actor) = actor {
            properties.insert(
                keys::LOCK_MEMBER_NUMBER.to_string(),
                json!(actor.member_number),
            );
        }

        if !has_text(properties, keys::LOCK) {
            properties.insert(keys::LOCK.to_string(), json!(config.kind.as_str()));
        }
        debug!(kind = %config.kind, asset = ?item.asset, "lock applied");
    }

    pub fn remove(&self, item: Option<&mut EquippedItem>) {
        let Some(item) = item else {
            return;
        };
        for key in keys::ALL_LOCK_KEYS {
            item.properties.remove(key);
        }
    }

    pub fn is_locked(&self, item: Option<&EquippedItem>) -> bool {
        item.map(|item| {
            has_text(&item.properties, keys::LOCKED_BY) || has_text(&item.properties, keys::LOCK)
        })
        .unwrap_or(false)
    }

    /// The lock kind the item reports through `LockedBy`, if it names a known kind.
    pub fn active_kind(&self, item: &EquippedItem) -> Option<LockKind> {
        item.properties
            .get(keys::LOCKED_BY)
            .and_then(Value::as_str)
            .and_then(|name| name.parse().ok())
            .filter(|kind: &LockKind| !kind.is_none())
    }
}

fn has_text(properties: &PropertyBag, key: &str) -> bool {
    match properties.get(key) {
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Null) | None => false,
        Some(_) => true,
    }
}

fn as_seconds(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.round() as i64))
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

fn text_field(key: &str, label: &str, default: &str) -> LockField {
    LockField {
        key: key.to_string(),
        label: label.to_string(),
        value_type: FieldType::Text,
        default: json!(default),
        min: None,
        max: None,
        pattern: None,
    }
}

fn timer_field() -> LockField {
    LockField {
        key: keys::REMOVE_TIMER.to_string(),
        label: "Duration (seconds)".to_string(),
        value_type: FieldType::Number,
        default: json!(DEFAULT_TIMER_SECONDS),
        min: Some(60),
        max: Some(86_400),
        pattern: None,
    }
}

fn define(kind: LockKind) -> LockDefinition {
    let (label, fields) = match kind {
        LockKind::None => ("No lock", Vec::new()),
        LockKind::Padlock => ("Padlock", Vec::new()),
        LockKind::CombinationPadlock => (
            "Combination padlock",
            vec![LockField {
                pattern: Some(r"\d{4}".to_string()),
                ..text_field(keys::COMBINATION_NUMBER, "Code (4 digits)", "0000")
            }],
        ),
        LockKind::TimerPadlock => ("Timer padlock", vec![timer_field()]),
        LockKind::PasswordPadlock => (
            "Password padlock",
            vec![text_field(keys::PASSWORD, "Password", "")],
        ),
        LockKind::OwnerPadlock => ("Owner padlock", Vec::new()),
        LockKind::LoversPadlock => ("Lovers padlock", Vec::new()),
        LockKind::MistressPadlock => ("Mistress padlock", Vec::new()),
        LockKind::HighSecurityPadlock => (
            "High security padlock",
            vec![text_field(
                keys::MEMBER_NUMBER_LIST_KEYS,
                "Key holders (member numbers, comma separated)",
                "",
            )],
        ),
        LockKind::MetalPadlock => ("Metal padlock", Vec::new()),
        LockKind::LoversTimerPadlock => ("Lovers timer padlock", vec![timer_field()]),
    };

    let mut property_template = PropertyBag::new();
    if !kind.is_none() {
        property_template.insert(keys::LOCKED_BY.to_string(), json!(kind.as_str()));
        for field in &fields {
            property_template.insert(field.key.clone(), field.default.clone());
        }
    }

    LockDefinition {
        kind,
        label: label.to_string(),
        property_template,
        configurable_fields: fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::AssetKey;
    use pretty_assertions::assert_eq;

    const T: i64 = 1_700_000_000;

    fn cuffs() -> EquippedItem {
        EquippedItem::new(AssetKey::new("ItemFeet", "LeatherCuffs"), "Default".into())
    }

    #[test]
    fn definitions_start_with_no_lock() {
        let manager = LockManager::new();
        let kinds: Vec<_> = manager.list_definitions().iter().map(|d| d.kind).collect();
        assert_eq!(kinds, LockKind::ALL.to_vec());
        assert!(manager.list_definitions()[0].property_template.is_empty());
    }

    #[test]
    fn create_config_fills_defaults_and_overrides() {
        let manager = LockManager::new();
        let mut overrides = PropertyBag::new();
        overrides.insert("RemoveTimer".to_string(), json!(120));
        overrides.insert("Unrelated".to_string(), json!(true));

        let config = manager.create_config("TimerPadlock", Some(&overrides)).unwrap();
        assert_eq!(config.kind, LockKind::TimerPadlock);
        assert_eq!(config.field("RemoveTimer"), Some(&json!(120)));
        assert!(config.field("Unrelated").is_none());

        let combo = manager.create_config("CombinationPadlock", None).unwrap();
        assert_eq!(combo.field("CombinationNumber"), Some(&json!("0000")));
    }

    #[test]
    fn create_config_rejects_unknown_kind() {
        let manager = LockManager::new();
        assert_eq!(
            manager.create_config("bogus-kind", None),
            Err(DomainError::UnknownLockKind("bogus-kind".to_string()))
        );
    }

    #[test]
    fn timer_duration_becomes_absolute_expiry() {
        let manager = LockManager::new();
        let mut item = cuffs();
        let config = LockConfig::new(LockKind::TimerPadlock).with_field("RemoveTimer", 3600);

        manager.apply_at(Some(&mut item), &config, None, T);

        assert_eq!(item.properties["RemoveTimer"], json!(T + 3600));
        assert_eq!(item.properties["LockedBy"], json!("TimerPadlock"));
        assert_eq!(item.properties["Lock"], json!("TimerPadlock"));
    }

    #[test]
    fn oversized_timer_duration_saturates() {
        let manager = LockManager::new();
        let mut item = cuffs();
        let config = LockConfig::new(LockKind::TimerPadlock).with_field("RemoveTimer", 1e300);

        manager.apply_at(Some(&mut item), &config, None, T);

        assert_eq!(item.properties["RemoveTimer"], json!(i64::MAX));
        assert_eq!(item.properties["LockedBy"], json!("TimerPadlock"));
    }

    #[test]
    fn timer_without_duration_uses_default() {
        let manager = LockManager::new();
        let mut item = cuffs();
        manager.apply_at(Some(&mut item), &LockConfig::new(LockKind::LoversTimerPadlock), None, T);
        assert_eq!(item.properties["RemoveTimer"], json!(T + DEFAULT_TIMER_SECONDS));
    }

    #[test]
    fn template_overrides_existing_properties_and_config_overrides_template() {
        let manager = LockManager::new();
        let mut item = cuffs();
        item.properties.insert("LockedBy".to_string(), json!("MetalPadlock"));
        item.properties.insert("Difficulty".to_string(), json!(3));

        let config = LockConfig::new(LockKind::PasswordPadlock).with_field("Password", "1234");
        manager.apply_at(Some(&mut item), &config, Some(&Actor::new(42)), T);

        assert_eq!(item.properties["LockedBy"], json!("PasswordPadlock"));
        assert_eq!(item.properties["Password"], json!("1234"));
        assert_eq!(item.properties["Difficulty"], json!(3));
        assert_eq!(item.properties["LockMemberNumber"], json!(42));
    }

    #[test]
    fn actor_is_recorded_even_without_fields() {
        let manager = LockManager::new();
        let mut item = cuffs();
        manager.apply_at(Some(&mut item), &LockConfig::new(LockKind::OwnerPadlock), Some(&Actor::new(7)), T);
        assert_eq!(item.properties["LockMemberNumber"], json!(7));
    }

    #[test]
    fn existing_marker_is_kept() {
        let manager = LockManager::new();
        let mut item = cuffs();
        item.properties.insert("Lock".to_string(), json!("CustomLock"));
        manager.apply_at(Some(&mut item), &LockConfig::new(LockKind::Padlock), None, T);
        assert_eq!(item.properties["Lock"], json!("CustomLock"));
    }

    #[test]
    fn no_lock_and_missing_item_are_noops() {
        let manager = LockManager::new();
        let mut item = cuffs();
        manager.apply_at(Some(&mut item), &LockConfig::none(), Some(&Actor::new(1)), T);
        assert!(item.properties.is_empty());
        manager.apply_at(None, &LockConfig::new(LockKind::Padlock), None, T);
        manager.remove(None);
        assert!(!manager.is_locked(None));
    }

    #[test]
    fn remove_clears_every_lock_key() {
        let manager = LockManager::new();
        let mut item = cuffs();
        item.properties.insert("Difficulty".to_string(), json!(2));
        let config = manager.create_config("HighSecurityPadlock", None).unwrap();
        manager.apply_at(Some(&mut item), &config, Some(&Actor::new(9)), T);
        assert!(manager.is_locked(Some(&item)));
        assert_eq!(manager.active_kind(&item), Some(LockKind::HighSecurityPadlock));

        manager.remove(Some(&mut item));

        assert!(!manager.is_locked(Some(&item)));
        assert_eq!(item.properties.len(), 1);
        assert_eq!(item.properties["Difficulty"], json!(2));
    }

    #[test]
    fn empty_marker_is_not_locked() {
        let manager = LockManager::new();
        let mut item = cuffs();
        item.properties.insert("LockedBy".to_string(), json!(""));
        assert!(!manager.is_locked(Some(&item)));
        assert_eq!(manager.active_kind(&item), None);
    }
}
