use super::types::EquipmentItem;
use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Equip request resolved against a hunter's inventory.
///
/// At most one item per type may be equipped; the caller persists both the
/// equip and every listed unequip together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipChange {
    pub equip: Uuid,
    pub unequip: Vec<Uuid>,
}

pub fn plan_equip(inventory: &[EquipmentItem], item_id: Uuid) -> Result<EquipChange> {
    let target = inventory
        .iter()
        .find(|item| item.id == item_id)
        .ok_or_else(|| EngineError::NotFound {
            kind: "item",
            id: item_id.to_string(),
        })?;

    let unequip = inventory
        .iter()
        .filter(|item| item.equipped && item.item_type == target.item_type && item.id != item_id)
        .map(|item| item.id)
        .collect();

    Ok(EquipChange {
        equip: item_id,
        unequip,
    })
}

/// Folds an equip change into an owned inventory.
pub fn apply_equip(inventory: &mut [EquipmentItem], change: &EquipChange) {
    for item in inventory.iter_mut() {
        if item.id == change.equip {
            item.equipped = true;
        } else if change.unequip.contains(&item.id) {
            item.equipped = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ItemStat, ItemType, Rarity};

    fn create_test_item(id: u128, item_type: ItemType, equipped: bool) -> EquipmentItem {
        let stat = match item_type {
            ItemType::Weapon => ItemStat::Attack(10),
            ItemType::Armor => ItemStat::Defense(10),
            ItemType::Accessory => ItemStat::Effect("+10 HP".to_string()),
        };
        let mut item = EquipmentItem::new(
            Uuid::from_u128(id),
            "Test",
            item_type,
            "test",
            Rarity::Common,
            stat,
        );
        item.equipped = equipped;
        item
    }

    #[test]
    fn test_equip_into_empty_slot() {
        let inventory = vec![create_test_item(1, ItemType::Weapon, false)];
        let change = plan_equip(&inventory, inventory[0].id).unwrap();
        assert_eq!(change.equip, inventory[0].id);
        assert!(change.unequip.is_empty());
    }

    #[test]
    fn test_equip_replaces_same_type_only() {
        let mut inventory = vec![
            create_test_item(2, ItemType::Weapon, true),
            create_test_item(3, ItemType::Armor, true),
            create_test_item(4, ItemType::Weapon, false),
        ];
        let new_weapon = inventory[2].id;
        let change = plan_equip(&inventory, new_weapon).unwrap();
        assert_eq!(change.unequip, vec![inventory[0].id]);

        apply_equip(&mut inventory, &change);
        assert!(!inventory[0].equipped);
        assert!(inventory[1].equipped);
        assert!(inventory[2].equipped);
    }

    #[test]
    fn test_reequipping_is_idempotent() {
        let inventory = vec![create_test_item(5, ItemType::Accessory, true)];
        let change = plan_equip(&inventory, inventory[0].id).unwrap();
        assert!(change.unequip.is_empty());
    }

    #[test]
    fn test_unknown_item_not_found() {
        let inventory = vec![create_test_item(6, ItemType::Weapon, false)];
        let err = plan_equip(&inventory, Uuid::nil()).unwrap_err();
        assert!(matches!(err, EngineError::NotFound { kind: "item", .. }));
    }
}
