//! Single-resolution dungeon combat.
//!
//! Pure helpers take rolled values explicitly; `simulate_dungeon_combat`
//! draws them from the injected generator in a fixed order (jitter, drop
//! chance, drop item, clear time, damage).

use super::types::DungeonCombatOutcome;
use crate::character::{player_combat_power, HunterRank, PlayerSnapshot};
use crate::core::constants::*;
use crate::items::{generate_equipment, roll_dungeon_drop_rarity};
use rand::Rng;

/// `clamp(power / required, 0, 1) * jitter`.
pub fn dungeon_success_rate(player_power: u64, required_power: u32, jitter: f64) -> f64 {
    if required_power == 0 {
        return jitter;
    }
    (player_power as f64 / required_power as f64).clamp(0.0, 1.0) * jitter
}

pub fn is_dungeon_success(success_rate: f64) -> bool {
    success_rate >= DUNGEON_SUCCESS_THRESHOLD
}

pub fn clear_experience(rank: HunterRank) -> u64 {
    (rank.required_power() / DUNGEON_CLEAR_EXP_DIVISOR) as u64
}

pub fn consolation_experience(rank: HunterRank) -> u64 {
    (rank.required_power() / DUNGEON_CONSOLATION_EXP_DIVISOR) as u64
}

/// Damage on a clear: uniform in `[0, hp/3)`.
pub fn roll_clear_damage(player_hp: u32, rng: &mut impl Rng) -> u32 {
    let cap = player_hp / 3;
    if cap == 0 {
        0
    } else {
        rng.gen_range(0..cap)
    }
}

/// Damage on a failed run: uniform in `[hp/3, hp-1]`.
///
/// Always leaves at least 1 HP when the hunter had any; a hunter entering
/// at 0 HP takes no further damage.
pub fn roll_failure_damage(player_hp: u32, rng: &mut impl Rng) -> u32 {
    let high = player_hp.saturating_sub(1);
    let low = (player_hp / 3).min(high);
    rng.gen_range(low..=high)
}

pub fn simulate_dungeon_combat(
    player_power: u64,
    player_hp: u32,
    player_level: u32,
    rank: HunterRank,
    rng: &mut impl Rng,
) -> DungeonCombatOutcome {
    let required_power = rank.required_power();
    let jitter = rng.gen_range(DUNGEON_JITTER_MIN..DUNGEON_JITTER_MAX);
    let success_rate = dungeon_success_rate(player_power, required_power, jitter);
    let success = is_dungeon_success(success_rate);

    tracing::debug!(
        %rank,
        player_power,
        required_power,
        success_rate,
        success,
        "dungeon combat resolved"
    );

    if success {
        let equipment_drop = if rng.gen::<f64>() < DUNGEON_DROP_CHANCE {
            let rarity = roll_dungeon_drop_rarity(rng);
            Some(generate_equipment(player_level, Some(rarity), rng))
        } else {
            None
        };
        let clear_time =
            rng.gen_range(DUNGEON_CLEAR_TIME_MIN_SECS..=DUNGEON_CLEAR_TIME_MAX_SECS);
        DungeonCombatOutcome {
            rank,
            success,
            required_power,
            success_rate,
            experience_gained: clear_experience(rank),
            equipment_drop,
            clear_time_secs: Some(clear_time),
            damage_taken: roll_clear_damage(player_hp, rng),
        }
    } else {
        DungeonCombatOutcome {
            rank,
            success,
            required_power,
            success_rate,
            experience_gained: consolation_experience(rank),
            equipment_drop: None,
            clear_time_secs: None,
            damage_taken: roll_failure_damage(player_hp, rng),
        }
    }
}

/// Runs a dungeon for a hunter using their current power, HP, and level.
pub fn enter_dungeon(
    player: &PlayerSnapshot,
    rank: HunterRank,
    rng: &mut impl Rng,
) -> DungeonCombatOutcome {
    simulate_dungeon_combat(
        player_combat_power(player),
        player.hp,
        player.level,
        rank,
        rng,
    )
}
