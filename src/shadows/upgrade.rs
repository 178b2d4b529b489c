use super::types::{ShadowStats, ShadowUnit};
use crate::core::constants::*;
use crate::error::{EngineError, Resource, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowUpgrade {
    pub old_level: u32,
    pub new_level: u32,
    pub stats: ShadowStats,
    pub experience: u64,
    pub max_experience: u64,
    pub loyalty: u32,
}

fn grow(value: u32) -> u32 {
    let bonus = ((value as f64 * SHADOW_STAT_GROWTH) as u32).max(1);
    value.saturating_add(bonus)
}

/// Levels a shadow once, spending one bar of experience.
pub fn upgrade_shadow(shadow: &ShadowUnit) -> Result<ShadowUpgrade> {
    if shadow.level >= SHADOW_MAX_LEVEL {
        return Err(EngineError::invalid(format!(
            "{} is already level {}",
            shadow.name, SHADOW_MAX_LEVEL
        )));
    }
    if shadow.experience < shadow.max_experience {
        return Err(EngineError::insufficient(
            Resource::Experience,
            shadow.max_experience,
            shadow.experience,
        ));
    }

    let upgrade = ShadowUpgrade {
        old_level: shadow.level,
        new_level: shadow.level + 1,
        stats: ShadowStats {
            attack: grow(shadow.stats.attack),
            defense: grow(shadow.stats.defense),
            hp: grow(shadow.stats.hp),
            mp: grow(shadow.stats.mp),
        },
        experience: shadow.experience - shadow.max_experience,
        max_experience: (shadow.max_experience as f64 * SHADOW_MAX_EXPERIENCE_GROWTH) as u64,
        loyalty: (shadow.loyalty + SHADOW_LOYALTY_PER_UPGRADE).min(SHADOW_MAX_LOYALTY),
    };
    tracing::info!(
        shadow = %shadow.id,
        level = upgrade.new_level,
        "shadow upgraded"
    );
    Ok(upgrade)
}

/// Experience total after a grant; the shadow does not level on its own.
pub fn grant_shadow_experience(shadow: &ShadowUnit, amount: u64) -> u64 {
    shadow.experience.saturating_add(amount)
}

impl ShadowUnit {
    pub fn apply_upgrade(&mut self, upgrade: &ShadowUpgrade) {
        self.level = upgrade.new_level;
        self.stats = upgrade.stats;
        self.experience = upgrade.experience;
        self.max_experience = upgrade.max_experience;
        self.loyalty = upgrade.loyalty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shadows::{build_shadow, ENEMY_TABLE};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn goblin() -> ShadowUnit {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        build_shadow(&ENEMY_TABLE[0], "hunter-1", 0, 0, &mut rng)
    }

    #[test]
    fn test_needs_full_experience_bar() {
        let mut shadow = goblin();
        shadow.experience = 999;
        let err = upgrade_shadow(&shadow).unwrap_err();
        assert_eq!(err, EngineError::insufficient(Resource::Experience, 1000, 999));
    }

    #[test]
    fn test_upgrade_effects() {
        let mut shadow = goblin();
        shadow.experience = grant_shadow_experience(&shadow, 1200);
        let upgrade = upgrade_shadow(&shadow).unwrap();
        assert_eq!(upgrade.new_level, 2);
        assert_eq!(upgrade.experience, 200);
        assert_eq!(upgrade.max_experience, 1500);
        assert_eq!(upgrade.stats.attack, 165);
        assert_eq!(upgrade.stats.defense, 82);
        assert_eq!(upgrade.stats.hp, 825);
        assert_eq!(upgrade.loyalty, 55);

        shadow.apply_upgrade(&upgrade);
        assert_eq!(shadow.level, 2);
        assert!(!shadow.can_upgrade());
    }

    #[test]
    fn test_small_stats_still_grow() {
        assert_eq!(grow(0), 1);
        assert_eq!(grow(5), 6);
    }

    #[test]
    fn test_loyalty_caps() {
        let mut shadow = goblin();
        shadow.loyalty = 98;
        shadow.experience = 1000;
        assert_eq!(upgrade_shadow(&shadow).unwrap().loyalty, 100);
    }

    #[test]
    fn test_max_level_rejected() {
        let mut shadow = goblin();
        shadow.level = SHADOW_MAX_LEVEL;
        shadow.experience = u64::MAX;
        assert!(matches!(
            upgrade_shadow(&shadow),
            Err(EngineError::InvalidTransition(_))
        ));
    }
}
