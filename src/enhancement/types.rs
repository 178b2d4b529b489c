use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_ENHANCEMENT_LEVEL: u8 = 10;

/// Experience charged per cost unit in `ENHANCEMENT_COSTS`.
pub const ENHANCEMENT_EXP_PER_COST_UNIT: u64 = 250;

pub const ENHANCEMENT_SUCCESS_RATES: [f64; 10] = [
    1.00, 1.00, 1.00, 1.00, // +1-4: 100%
    0.70, 0.60, 0.50, // +5-7: 70%, 60%, 50%
    0.30, 0.15, 0.05, // +8-10: 30%, 15%, 5%
];

pub const ENHANCEMENT_COSTS: [u64; 10] = [
    1, 1, 1, 1, // +1-4
    3, 3, 3, // +5-7
    5, 5,  // +8-9
    10, // +10
];

/// Cumulative attack/defense bonus (percent) at each enhancement level.
pub const ENHANCEMENT_CUMULATIVE_BONUS: [f64; 11] = [
    0.0, 5.0, 10.0, 15.0, 20.0, 30.0, 40.0, 55.0, 75.0, 100.0, 150.0,
];

pub fn success_rate(target_level: u8) -> f64 {
    if target_level == 0 || target_level > MAX_ENHANCEMENT_LEVEL {
        return 0.0;
    }
    ENHANCEMENT_SUCCESS_RATES[(target_level - 1) as usize]
}

/// Experience charged for an attempt at `target_level`, win or lose.
pub fn enhancement_cost(target_level: u8) -> u64 {
    if target_level == 0 || target_level > MAX_ENHANCEMENT_LEVEL {
        return 0;
    }
    ENHANCEMENT_COSTS[(target_level - 1) as usize] * ENHANCEMENT_EXP_PER_COST_UNIT
}

pub fn enhancement_multiplier(level: u8) -> f64 {
    let idx = (level as usize).min(MAX_ENHANCEMENT_LEVEL as usize);
    1.0 + ENHANCEMENT_CUMULATIVE_BONUS[idx] / 100.0
}

/// Base stat scaled by the enhancement multiplier, rounded.
pub fn enhanced_value(base: u32, level: u8) -> u32 {
    (base as f64 * enhancement_multiplier(level)).round() as u32
}

/// Format an enhancement prefix for display (e.g., "+5 " or "" for +0)
pub fn enhancement_prefix(level: u8) -> String {
    if level == 0 {
        String::new()
    } else {
        format!("+{} ", level)
    }
}

/// Result of one enhancement attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancementOutcome {
    pub item_id: Uuid,
    pub success: bool,
    pub old_level: u8,
    pub new_level: u8,
    pub success_rate: f64,
    /// Charged on success and on failure alike.
    pub experience_spent: u64,
    pub message: String,
}
