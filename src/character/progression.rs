//! Applies experience changes to a hunter and reports level-ups.

use super::leveling::{calculate_vitals, level_from_experience, level_requirement, stat_points_between};
use super::player::{PlayerSnapshot, Vitals};
use super::rank::{rank_from_level, HunterRank};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpEvent {
    pub old_level: u32,
    pub new_level: u32,
    pub stat_points_gained: u32,
    pub old_rank: HunterRank,
    /// Set only when the rank actually changed.
    pub new_rank: Option<HunterRank>,
}

/// Everything a caller needs to persist after an experience change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionOutcome {
    pub experience_delta: i64,
    pub new_experience: u64,
    pub new_level: u32,
    pub experience_to_next: u64,
    pub level_up: Option<LevelUpEvent>,
    /// Recomputed pools; present only on level-up.
    pub vitals: Option<Vitals>,
}

impl ProgressionOutcome {
    pub fn leveled_up(&self) -> bool {
        self.level_up.is_some()
    }
}

/// Grants `amount` experience.
pub fn apply_experience(player: &PlayerSnapshot, amount: u64) -> ProgressionOutcome {
    apply_experience_change(player, amount.min(i64::MAX as u64) as i64)
}

/// Adds (or, for spending, removes) experience.
///
/// Total experience never drops below zero and the level never goes down,
/// even when spending leaves the total short of the current level's floor.
pub fn apply_experience_change(player: &PlayerSnapshot, delta: i64) -> ProgressionOutcome {
    let new_experience = if delta >= 0 {
        player.experience.saturating_add(delta as u64)
    } else {
        player.experience.saturating_sub(delta.unsigned_abs())
    };

    let old_level = player.level;
    let new_level = level_from_experience(new_experience).max(old_level);

    let (level_up, vitals) = if new_level > old_level {
        let new_rank = rank_from_level(new_level);
        let event = LevelUpEvent {
            old_level,
            new_level,
            stat_points_gained: stat_points_between(old_level, new_level),
            old_rank: player.rank,
            new_rank: (new_rank != player.rank).then_some(new_rank),
        };
        tracing::info!(
            player = %player.id,
            old_level,
            new_level,
            stat_points = event.stat_points_gained,
            "level up"
        );
        let vitals = calculate_vitals(
            new_level,
            player.stats.vitality,
            player.stats.intelligence,
        );
        (Some(event), Some(vitals))
    } else {
        (None, None)
    };

    ProgressionOutcome {
        experience_delta: delta,
        new_experience,
        new_level,
        experience_to_next: level_requirement(new_level),
        level_up,
        vitals,
    }
}

impl PlayerSnapshot {
    pub fn apply_progression(&mut self, outcome: &ProgressionOutcome) {
        self.experience = outcome.new_experience;
        self.level = outcome.new_level;
        self.experience_to_next = outcome.experience_to_next;
        if let Some(event) = &outcome.level_up {
            self.stat_points += event.stat_points_gained;
            if let Some(rank) = event.new_rank {
                self.rank = rank;
            }
        }
        if let Some(vitals) = outcome.vitals {
            self.set_vitals(vitals);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> PlayerSnapshot {
        PlayerSnapshot::new("p1", "Jinwoo")
    }

    #[test]
    fn test_first_level_up() {
        let outcome = apply_experience(&fresh(), 1000);
        assert_eq!(outcome.new_level, 2);
        let event = outcome.level_up.unwrap();
        assert_eq!(event.old_level, 1);
        assert_eq!(event.new_level, 2);
        assert_eq!(event.stat_points_gained, 3);
        assert_eq!(event.new_rank, None);
    }

    #[test]
    fn test_no_level_up_changes_only_experience() {
        let outcome = apply_experience(&fresh(), 500);
        assert_eq!(outcome.new_experience, 500);
        assert_eq!(outcome.new_level, 1);
        assert!(outcome.level_up.is_none());
        assert!(outcome.vitals.is_none());
    }

    #[test]
    fn test_multi_level_jump_sums_every_level() {
        // 1000 + 2000 + 3500 = 6500 reaches level 4
        let outcome = apply_experience(&fresh(), 6500);
        assert_eq!(outcome.new_level, 4);
        assert_eq!(outcome.level_up.unwrap().stat_points_gained, 9);
    }

    #[test]
    fn test_rank_change_reported() {
        let mut player = fresh();
        player.level = 9;
        player.experience = crate::character::cumulative_experience_for_level(9);
        let needed = crate::character::level_requirement(9);
        let outcome = apply_experience(&player, needed);
        let event = outcome.level_up.unwrap();
        assert_eq!(event.new_level, 10);
        assert_eq!(event.old_rank, HunterRank::E);
        assert_eq!(event.new_rank, Some(HunterRank::D));
    }

    #[test]
    fn test_level_up_recomputes_vitals_as_full_heal() {
        let mut player = fresh();
        player.hp = 1;
        let outcome = apply_experience(&player, 1000);
        let vitals = outcome.vitals.unwrap();
        assert_eq!(vitals.max_hp, 100 + 10 * 20 + 2 * 10);
        assert_eq!(vitals.hp, vitals.max_hp);
        assert_eq!(vitals.mp, vitals.max_mp);
    }

    #[test]
    fn test_spending_never_lowers_level() {
        let mut player = fresh();
        player.apply_progression(&apply_experience(&player, 3000));
        assert_eq!(player.level, 3);

        let outcome = apply_experience_change(&player, -2500);
        assert_eq!(outcome.new_experience, 500);
        assert_eq!(outcome.new_level, 3);
        assert!(outcome.level_up.is_none());
    }

    #[test]
    fn test_spending_floors_at_zero() {
        let outcome = apply_experience_change(&fresh(), -10);
        assert_eq!(outcome.new_experience, 0);
    }

    #[test]
    fn test_apply_progression_updates_snapshot() {
        let mut player = fresh();
        let outcome = apply_experience(&player, 1000);
        player.apply_progression(&outcome);
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 1000);
        assert_eq!(player.experience_to_next, 2000);
        assert_eq!(player.stat_points, 3);
        assert_eq!(player.hp, player.max_hp);
    }
}
