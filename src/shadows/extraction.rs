//! Raising defeated enemies as shadows.

use super::types::{enemy_template, EnemyTemplate, ShadowStats, ShadowUnit};
use crate::character::PlayerSnapshot;
use crate::core::constants::*;
use crate::core::random_uuid;
use crate::error::{EngineError, Resource, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What the caller asks for: which enemy, at what base odds and mana cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionAttempt {
    pub enemy_name: String,
    pub base_success_rate: f64,
    pub mana_cost: u32,
}

impl ExtractionAttempt {
    pub fn new(enemy_name: impl Into<String>, base_success_rate: f64, mana_cost: u32) -> Self {
        Self {
            enemy_name: enemy_name.into(),
            base_success_rate,
            mana_cost,
        }
    }

    /// Uses the enemy table's default odds and cost.
    pub fn for_enemy(enemy_name: &str) -> Self {
        let template = enemy_template(enemy_name);
        Self::new(
            template.name,
            template.base_success_rate,
            template.mana_cost,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    pub success: bool,
    pub final_success_rate: f64,
    /// Zero on a failed roll.
    pub mana_spent: u32,
    pub remaining_mp: u32,
    pub shadow: Option<ShadowUnit>,
    pub message: String,
}

/// `min(0.95, base + level * 0.02)`, floored at zero.
pub fn extraction_success_rate(base_success_rate: f64, player_level: u32) -> f64 {
    (base_success_rate + player_level as f64 * EXTRACTION_BONUS_PER_LEVEL)
        .clamp(0.0, EXTRACTION_MAX_SUCCESS_RATE)
}

/// Builds a fresh shadow from an enemy template.
///
/// `attack_offset` and `defense_offset` are the rolled spreads, applied with
/// a floor of zero.
pub fn build_shadow(
    template: &EnemyTemplate,
    owner_id: &str,
    attack_offset: i64,
    defense_offset: i64,
    rng: &mut impl Rng,
) -> ShadowUnit {
    let base = template.base_stat;
    let attack = (base as i64 + attack_offset).max(0) as u32;
    let defense = ((base / 2) as i64 + defense_offset).max(0) as u32;

    ShadowUnit {
        id: random_uuid(rng),
        owner_id: owner_id.to_string(),
        name: format!("Shadow {}", template.name),
        shadow_type: template.shadow_type.to_string(),
        rarity: template.rarity,
        level: 1,
        stats: ShadowStats {
            attack,
            defense,
            hp: base * SHADOW_HP_PER_BASE,
            mp: base / 2,
        },
        loyalty: SHADOW_STARTING_LOYALTY,
        experience: 0,
        max_experience: SHADOW_STARTING_MAX_EXPERIENCE,
    }
}

/// Attempts to raise a shadow.
///
/// Returns `InsufficientResource` before rolling when the hunter cannot pay
/// the mana cost. A failed roll is free.
pub fn extract_shadow(
    player: &PlayerSnapshot,
    attempt: &ExtractionAttempt,
    rng: &mut impl Rng,
) -> Result<ExtractionOutcome> {
    if player.mp < attempt.mana_cost {
        return Err(EngineError::insufficient(
            Resource::Mana,
            attempt.mana_cost as u64,
            player.mp as u64,
        ));
    }

    let template = enemy_template(&attempt.enemy_name);
    let rate = extraction_success_rate(attempt.base_success_rate, player.level);
    let roll: f64 = rng.gen();
    tracing::debug!(enemy = template.name, rate, roll, "extraction roll");

    if roll >= rate {
        return Ok(ExtractionOutcome {
            success: false,
            final_success_rate: rate,
            mana_spent: 0,
            remaining_mp: player.mp,
            shadow: None,
            message: format!("The shadow of {} did not answer", template.name),
        });
    }

    let attack_offset = rng.gen_range(-SHADOW_ATTACK_SPREAD..=SHADOW_ATTACK_SPREAD);
    let defense_offset = rng.gen_range(-SHADOW_DEFENSE_SPREAD..=SHADOW_DEFENSE_SPREAD);
    let shadow = build_shadow(template, &player.id, attack_offset, defense_offset, rng);

    tracing::info!(
        player = %player.id,
        shadow = %shadow.name,
        attack = shadow.stats.attack,
        "shadow extracted"
    );

    Ok(ExtractionOutcome {
        success: true,
        final_success_rate: rate,
        mana_spent: attempt.mana_cost,
        remaining_mp: player.mp - attempt.mana_cost,
        message: format!("Arise! {} joins the army", shadow.name),
        shadow: Some(shadow),
    })
}

impl PlayerSnapshot {
    pub fn apply_extraction(&mut self, outcome: &ExtractionOutcome) {
        self.mp = outcome.remaining_mp;
        if outcome.shadow.is_some() {
            self.shadow_count += 1;
        }
    }
}
