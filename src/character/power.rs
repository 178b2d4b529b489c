use super::player::PlayerSnapshot;
use super::stats::Stats;
use crate::core::constants::*;
use crate::items::EquipmentItem;

/// Scalar power rating from stats and gear.
///
/// `2*STR + 1.5*AGI + 1.8*INT + 1.2*VIT + SENSE + Σattack + 0.8*Σdefense`,
/// truncated. Only equipped items count; enhanced items contribute their
/// effective values.
pub fn combat_power(stats: &Stats, equipment: &[EquipmentItem]) -> u64 {
    let base = stats.strength as f64 * POWER_PER_STRENGTH
        + stats.agility as f64 * POWER_PER_AGILITY
        + stats.intelligence as f64 * POWER_PER_INTELLIGENCE
        + stats.vitality as f64 * POWER_PER_VITALITY
        + stats.sense as f64 * POWER_PER_SENSE;

    let (attack, defense) = equipment
        .iter()
        .filter(|item| item.equipped)
        .fold((0u64, 0u64), |(atk, def), item| {
            (
                atk + item.effective_attack().unwrap_or(0) as u64,
                def + item.effective_defense().unwrap_or(0) as u64,
            )
        });

    (base + attack as f64 + defense as f64 * POWER_PER_DEFENSE) as u64
}

pub fn player_combat_power(player: &PlayerSnapshot) -> u64 {
    combat_power(&player.stats, &player.equipment)
}
