use crate::entities::EquippedItem;
use crate::value_objects::ColorSpec;

/// The minimal read/write surface of a live character.
pub trait LiveTarget {
    fn label(&self) -> String {
        "target".to_string()
    }

    fn equipped(&self) -> &[EquippedItem];

    fn equipped_mut(&mut self) -> &mut Vec<EquippedItem>;

    fn find_item_mut(&mut self, group: &str, asset: &str) -> Option<&mut EquippedItem> {
        self.equipped_mut()
            .iter_mut()
            .find(|item| item.is_asset(group, asset))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquipRequest<'a> {
    pub asset: &'a str,
    pub group: &'a str,
    pub color: &'a ColorSpec,
    pub difficulty: i64,
}

/// Host-side equip and strip operations.
pub trait EquipPrimitives: Send + Sync {
    fn equip(&self, target: &mut dyn LiveTarget, request: &EquipRequest<'_>) -> anyhow::Result<()>;
    fn strip(&self, target: &mut dyn LiveTarget, group: &str) -> anyhow::Result<()>;
}

/// Host-side recomputation of derived/visual state after a batch of changes.
pub trait RefreshPrimitive: Send + Sync {
    fn refresh(&self, target: &mut dyn LiveTarget) -> anyhow::Result<()>;
}
