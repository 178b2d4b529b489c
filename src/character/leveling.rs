//! Experience curve, stat budgets, and HP/MP formulas.
//!
//! Experience is always the hunter's total accumulated experience, never the
//! amount earned inside the current level.

use super::player::Vitals;
use crate::core::constants::*;

/// Experience needed to advance from `level` to `level + 1`.
///
/// Levels 1-5 use a fixed table; above that the curve is
/// `floor(1000 * 1.5^(level-1))`. The raw curve dips below the table at
/// level 6 (7593 < 8000), so that level is lifted to one past the table's
/// last entry to keep requirements strictly increasing.
pub fn level_requirement(level: u32) -> u64 {
    let table_len = BASE_LEVEL_REQUIREMENTS.len() as u32;
    if level == 0 {
        return BASE_LEVEL_REQUIREMENTS[0];
    }
    if level <= table_len {
        return BASE_LEVEL_REQUIREMENTS[(level - 1) as usize];
    }
    let curve = (LEVEL_CURVE_BASE * LEVEL_CURVE_GROWTH.powi(level as i32 - 1)).floor() as u64;
    curve.max(BASE_LEVEL_REQUIREMENTS[BASE_LEVEL_REQUIREMENTS.len() - 1] + 1)
}

/// Level reached with `total_exp` accumulated since level 1.
pub fn level_from_experience(total_exp: u64) -> u32 {
    let mut level = STARTING_LEVEL;
    let mut remaining = total_exp;
    loop {
        let requirement = level_requirement(level);
        if remaining < requirement {
            return level;
        }
        remaining -= requirement;
        level += 1;
    }
}

/// Total experience required to reach `level` from level 1.
pub fn cumulative_experience_for_level(level: u32) -> u64 {
    (STARTING_LEVEL..level.max(STARTING_LEVEL))
        .map(level_requirement)
        .fold(0u64, |acc, req| acc.saturating_add(req))
}

/// Stat points granted for reaching `level`.
pub fn stat_bonus_for_level(level: u32) -> u32 {
    STAT_BONUS_BANDS
        .iter()
        .find(|(max_level, _)| level <= *max_level)
        .map(|(_, points)| *points)
        .unwrap_or(STAT_BONUS_MAX)
}

/// Stat points granted across every level in `old_level+1 ..= new_level`.
pub fn stat_points_between(old_level: u32, new_level: u32) -> u32 {
    if new_level <= old_level {
        return 0;
    }
    (old_level + 1..=new_level).map(stat_bonus_for_level).sum()
}

/// Recomputes HP and MP pools.
///
/// Current values are set equal to the new maximums: a recompute is a full
/// heal.
pub fn calculate_vitals(level: u32, vitality: u32, intelligence: u32) -> Vitals {
    let hp = BASE_HP
        .saturating_add(vitality.saturating_mul(HP_PER_VITALITY))
        .saturating_add(level.saturating_mul(HP_PER_LEVEL));
    let mp = BASE_MP
        .saturating_add(intelligence.saturating_mul(MP_PER_INTELLIGENCE))
        .saturating_add(level.saturating_mul(MP_PER_LEVEL));
    Vitals {
        hp,
        max_hp: hp,
        mp,
        max_mp: mp,
    }
}
