use super::types::*;
use crate::error::{EngineError, Resource, Result};
use crate::items::EquipmentItem;
use rand::Rng;

/// Pure resolution given an already rolled value in `[0, 1)`.
///
/// Refuses at the level cap (no charge) and when `available_experience`
/// cannot cover the cost. A failed roll still charges the full cost and
/// leaves the level where it was.
pub fn resolve_enhancement(
    item: &EquipmentItem,
    available_experience: u64,
    roll: f64,
) -> Result<EnhancementOutcome> {
    let current_level = item.enhancement_level;
    if current_level >= MAX_ENHANCEMENT_LEVEL {
        return Err(EngineError::invalid(format!(
            "{} is already at +{}",
            item.name, MAX_ENHANCEMENT_LEVEL
        )));
    }

    let target_level = current_level + 1;
    let cost = enhancement_cost(target_level);
    if available_experience < cost {
        return Err(EngineError::insufficient(
            Resource::Experience,
            cost,
            available_experience,
        ));
    }

    let rate = success_rate(target_level);
    let success = roll < rate;
    let new_level = if success { target_level } else { current_level };
    let message = if success {
        format!(
            "{}{} glows with new power",
            enhancement_prefix(new_level),
            item.name
        )
    } else {
        format!("Enhancement of {} failed", item.name)
    };

    Ok(EnhancementOutcome {
        item_id: item.id,
        success,
        old_level: current_level,
        new_level,
        success_rate: rate,
        experience_spent: cost,
        message,
    })
}

/// Attempt to enhance an item, paying with the hunter's experience.
pub fn attempt_enhancement<R: Rng>(
    item: &EquipmentItem,
    available_experience: u64,
    rng: &mut R,
) -> Result<EnhancementOutcome> {
    // Validate before rolling so refused calls don't consume randomness.
    resolve_enhancement(item, available_experience, 1.0)?;
    let outcome = resolve_enhancement(item, available_experience, rng.gen::<f64>())?;
    tracing::info!(
        item = %item.id,
        success = outcome.success,
        old_level = outcome.old_level,
        new_level = outcome.new_level,
        spent = outcome.experience_spent,
        "enhancement attempt"
    );
    Ok(outcome)
}

impl EquipmentItem {
    pub fn apply_enhancement(&mut self, outcome: &EnhancementOutcome) {
        self.enhancement_level = outcome.new_level.min(MAX_ENHANCEMENT_LEVEL);
    }
}
