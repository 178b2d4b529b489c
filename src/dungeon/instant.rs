//! Instant dungeons: a short run of individual fights that stops at the
//! first defeat.

use super::types::{Encounter, InstantDungeonOutcome};
use crate::core::constants::*;
use crate::shadows::ENEMY_TABLE;
use rand::Rng;

/// Scales a base roll in `[50, 200)` by `level / 5 + 1` (fractional).
pub fn instant_enemy_power(player_level: u32, base_roll: f64) -> f64 {
    base_roll * (player_level as f64 / INSTANT_LEVELS_PER_SCALE_STEP as f64 + 1.0)
}

pub fn encounter_victory(player_power: u64, enemy_power: f64) -> bool {
    player_power as f64 > enemy_power * INSTANT_VICTORY_RATIO
}

pub fn encounter_experience(enemy_power: f64) -> u64 {
    (enemy_power / INSTANT_EXP_DIVISOR) as u64
}

pub fn run_instant_dungeon(
    player_power: u64,
    player_level: u32,
    rng: &mut impl Rng,
) -> InstantDungeonOutcome {
    let planned = rng.gen_range(INSTANT_MIN_ENCOUNTERS..=INSTANT_MAX_ENCOUNTERS);
    let mut encounters = Vec::with_capacity(planned as usize);
    let mut total_experience = 0u64;

    for _ in 0..planned {
        let enemy = &ENEMY_TABLE[rng.gen_range(0..ENEMY_TABLE.len())];
        let base_roll = rng.gen_range(INSTANT_ENEMY_POWER_MIN..INSTANT_ENEMY_POWER_MAX);
        let enemy_power = instant_enemy_power(player_level, base_roll);
        let victory = encounter_victory(player_power, enemy_power);

        if !victory {
            tracing::debug!(enemy = enemy.name, enemy_power, "instant dungeon defeat");
            encounters.push(Encounter {
                enemy_name: enemy.name.to_string(),
                enemy_power: enemy_power as u64,
                victory: false,
                experience_gained: 0,
                extractable: false,
            });
            break;
        }

        let experience = encounter_experience(enemy_power);
        total_experience += experience;
        encounters.push(Encounter {
            enemy_name: enemy.name.to_string(),
            enemy_power: enemy_power as u64,
            victory: true,
            experience_gained: experience,
            extractable: rng.gen::<f64>() < INSTANT_EXTRACTABLE_CHANCE,
        });
    }

    InstantDungeonOutcome {
        planned_encounters: planned,
        encounters,
        total_experience,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_enemy_power_scaling() {
        assert!((instant_enemy_power(0, 100.0) - 100.0).abs() < 1e-9);
        assert!((instant_enemy_power(1, 100.0) - 120.0).abs() < 1e-9);
        assert!((instant_enemy_power(4, 100.0) - 180.0).abs() < 1e-9);
        assert!((instant_enemy_power(5, 100.0) - 200.0).abs() < 1e-9);
        assert!((instant_enemy_power(9, 100.0) - 280.0).abs() < 1e-9);
        assert!((instant_enemy_power(27, 100.0) - 640.0).abs() < 1e-9);
    }

    #[test]
    fn test_victory_is_strict() {
        assert!(encounter_victory(71, 100.0));
        assert!(!encounter_victory(70, 100.0));
    }

    #[test]
    fn test_strong_hunter_clears_every_run() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..100 {
            let outcome = run_instant_dungeon(1_000_000, 10, &mut rng);
            assert!((3..=7).contains(&outcome.planned_encounters));
            assert!(outcome.cleared());
            let sum: u64 = outcome.encounters.iter().map(|e| e.experience_gained).sum();
            assert_eq!(sum, outcome.total_experience);
        }
    }

    #[test]
    fn test_weak_hunter_stops_at_first_defeat() {
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        for _ in 0..100 {
            // power 10 never beats 50*0.7
            let outcome = run_instant_dungeon(10, 1, &mut rng);
            assert_eq!(outcome.encounters.len(), 1);
            assert!(!outcome.encounters[0].victory);
            assert!(!outcome.cleared());
            assert_eq!(outcome.total_experience, 0);
            assert!(outcome.extractable_enemies().is_empty());
        }
    }

    #[test]
    fn test_extractable_rate() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let (mut wins, mut marked) = (0usize, 0usize);
        for _ in 0..1000 {
            let outcome = run_instant_dungeon(1_000_000, 1, &mut rng);
            wins += outcome.victories();
            marked += outcome.extractable_enemies().len();
        }
        let ratio = marked as f64 / wins as f64;
        assert!(ratio > 0.25 && ratio < 0.35, "ratio {ratio}");
    }
}
