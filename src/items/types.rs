use crate::core::constants::RARITY_MULTIPLIERS;
use crate::enhancement::enhanced_value;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Weapon,
    Armor,
    Accessory,
}

impl ItemType {
    pub fn all() -> [ItemType; 3] {
        [ItemType::Weapon, ItemType::Armor, ItemType::Accessory]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemType::Weapon => "weapon",
            ItemType::Armor => "armor",
            ItemType::Accessory => "accessory",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
    Mythic = 4,
}

impl Rarity {
    pub fn all() -> [Rarity; 5] {
        [
            Rarity::Common,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
            Rarity::Mythic,
        ]
    }

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Scales generated item values: 1.0, 1.5, 2.0, 3.0, 4.0.
    pub fn multiplier(&self) -> f64 {
        RARITY_MULTIPLIERS[self.index()]
    }
}

/// The single combat-relevant stat family an item carries.
///
/// Weapons carry attack, armor carries defense, accessories carry a flavor
/// effect. Flattened into the item so the stored form has the flat
/// optional `attack` / `defense` / `effect` fields with exactly one present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStat {
    Attack(u32),
    Defense(u32),
    Effect(String),
}

impl ItemStat {
    pub fn matches(&self, item_type: ItemType) -> bool {
        matches!(
            (self, item_type),
            (ItemStat::Attack(_), ItemType::Weapon)
                | (ItemStat::Defense(_), ItemType::Armor)
                | (ItemStat::Effect(_), ItemType::Accessory)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub category: String,
    pub rarity: Rarity,
    #[serde(flatten)]
    pub stat: ItemStat,
    pub durability: u32,
    #[serde(default)]
    pub enhancement_level: u8,
    #[serde(default)]
    pub equipped: bool,
}

impl EquipmentItem {
    /// Ids come from the caller; generated items draw them through
    /// `core::random_uuid` so seeded runs stay reproducible.
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        item_type: ItemType,
        category: impl Into<String>,
        rarity: Rarity,
        stat: ItemStat,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            item_type,
            category: category.into(),
            rarity,
            stat,
            durability: crate::core::constants::ITEM_STARTING_DURABILITY,
            enhancement_level: 0,
            equipped: false,
        }
    }

    pub fn attack(&self) -> Option<u32> {
        match self.stat {
            ItemStat::Attack(v) => Some(v),
            _ => None,
        }
    }

    pub fn defense(&self) -> Option<u32> {
        match self.stat {
            ItemStat::Defense(v) => Some(v),
            _ => None,
        }
    }

    pub fn effect(&self) -> Option<&str> {
        match &self.stat {
            ItemStat::Effect(e) => Some(e),
            _ => None,
        }
    }

    /// Attack after the enhancement bonus.
    pub fn effective_attack(&self) -> Option<u32> {
        self.attack()
            .map(|v| enhanced_value(v, self.enhancement_level))
    }

    /// Defense after the enhancement bonus.
    pub fn effective_defense(&self) -> Option<u32> {
        self.defense()
            .map(|v| enhanced_value(v, self.enhancement_level))
    }
}
