//! Random equipment generation.
//!
//! Two rarity distributions exist and are kept separate on purpose: the
//! generic table is relative integer weights, the dungeon-drop table is
//! direct probabilities. Merging them would shift drop rates.

use super::types::{EquipmentItem, ItemStat, ItemType, Rarity};
use crate::core::constants::*;
use crate::core::random_uuid;
use rand::Rng;

struct ItemTemplate {
    categories: &'static [&'static str],
    names: &'static [&'static str],
}

fn template(item_type: ItemType) -> ItemTemplate {
    match item_type {
        ItemType::Weapon => ItemTemplate {
            categories: &["sword", "dagger", "bow", "staff"],
            names: &["Blade", "Sword", "Dagger", "Bow", "Staff"],
        },
        ItemType::Armor => ItemTemplate {
            categories: &["chest", "legs", "helmet", "boots"],
            names: &["Armor", "Plate", "Helm", "Boots"],
        },
        ItemType::Accessory => ItemTemplate {
            categories: &["ring", "necklace", "earring"],
            names: &["Ring", "Necklace", "Earring"],
        },
    }
}

/// Maps a roll in `0..sum(GENERIC_RARITY_WEIGHTS)` to a rarity.
pub fn rarity_for_weight_roll(roll: u32) -> Rarity {
    let mut threshold = 0;
    for (rarity, weight) in Rarity::all().into_iter().zip(GENERIC_RARITY_WEIGHTS) {
        threshold += weight;
        if roll < threshold {
            return rarity;
        }
    }
    Rarity::Mythic
}

/// Maps a roll in `[0, 1)` to a rarity using the dungeon-drop probabilities.
pub fn rarity_for_drop_roll(roll: f64) -> Rarity {
    let mut threshold = 0.0;
    for (rarity, chance) in Rarity::all().into_iter().zip(DUNGEON_DROP_RARITY_CHANCES) {
        threshold += chance;
        if roll < threshold {
            return rarity;
        }
    }
    Rarity::Mythic
}

/// Rarity for equipment generated outside dungeons (50/30/15/4/1 weights).
pub fn roll_generic_rarity(rng: &mut impl Rng) -> Rarity {
    let total: u32 = GENERIC_RARITY_WEIGHTS.iter().sum();
    rarity_for_weight_roll(rng.gen_range(0..total))
}

/// Rarity for dungeon drops (40/30/20/8/2 percent).
pub fn roll_dungeon_drop_rarity(rng: &mut impl Rng) -> Rarity {
    rarity_for_drop_roll(rng.gen::<f64>())
}

pub fn roll_item_type(rng: &mut impl Rng) -> ItemType {
    let types = ItemType::all();
    types[rng.gen_range(0..types.len())]
}

/// `playerLevel * 5 * rarity multiplier * jitter`, truncated.
pub fn item_stat_value(player_level: u32, rarity: Rarity, jitter: f64) -> u32 {
    let base_value = player_level as f64 * ITEM_VALUE_PER_LEVEL as f64;
    (base_value * rarity.multiplier() * jitter) as u32
}

/// Candidate accessory effects; magnitudes scale with the rarity multiplier.
pub fn accessory_effects(rarity: Rarity) -> [String; 5] {
    let m = rarity.multiplier();
    [
        format!("+{} HP", (10.0 * m) as u32),
        format!("+{} MP", (5.0 * m) as u32),
        format!("+{} Strength", (2.0 * m) as u32),
        format!("+{} Agility", (2.0 * m) as u32),
        format!("+{} Intelligence", (2.0 * m) as u32),
    ]
}

/// Generate a piece of equipment scaled to `player_level`.
/// With no rarity given, one is rolled from the generic weights.
pub fn generate_equipment(
    player_level: u32,
    rarity: Option<Rarity>,
    rng: &mut impl Rng,
) -> EquipmentItem {
    let rarity = rarity.unwrap_or_else(|| roll_generic_rarity(rng));
    let item_type = roll_item_type(rng);
    generate_equipment_of_type(player_level, rarity, item_type, rng)
}

pub fn generate_equipment_of_type(
    player_level: u32,
    rarity: Rarity,
    item_type: ItemType,
    rng: &mut impl Rng,
) -> EquipmentItem {
    let template = template(item_type);
    let category = template.categories[rng.gen_range(0..template.categories.len())];
    let base_name = template.names[rng.gen_range(0..template.names.len())];

    let stat = match item_type {
        ItemType::Weapon => {
            let jitter = rng.gen_range(ITEM_JITTER_MIN..=ITEM_JITTER_MAX);
            ItemStat::Attack(item_stat_value(player_level, rarity, jitter))
        }
        ItemType::Armor => {
            let jitter = rng.gen_range(ITEM_JITTER_MIN..=ITEM_JITTER_MAX);
            ItemStat::Defense(item_stat_value(player_level, rarity, jitter))
        }
        ItemType::Accessory => {
            let effects = accessory_effects(rarity);
            let pick = rng.gen_range(0..effects.len());
            ItemStat::Effect(effects[pick].clone())
        }
    };

    let item = EquipmentItem::new(
        random_uuid(rng),
        format!("{} {}", rarity.name(), base_name),
        item_type,
        category,
        rarity,
        stat,
    );
    tracing::debug!(name = %item.name, ?item_type, ?rarity, "generated equipment");
    item
}
