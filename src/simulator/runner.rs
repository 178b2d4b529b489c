//! Main simulation runner.
//!
//! Each run takes a fresh copy of the configured hunter through one gate of
//! every rank, one extraction attempt per known enemy, and one instant
//! dungeon, recording raw outcomes for the report.

use super::config::SimConfig;
use super::report::SimReport;
use crate::character::{player_combat_power, HunterRank, PlayerSnapshot};
use crate::dungeon::{
    enter_dungeon, run_instant_dungeon, DungeonCombatOutcome, InstantDungeonOutcome,
};
use crate::shadows::{extract_shadow, ExtractionAttempt, ExtractionOutcome, ENEMY_TABLE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Raw outcomes from a single run.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub dungeons: Vec<DungeonCombatOutcome>,
    /// `None` where the hunter could not pay the mana cost.
    pub extractions: Vec<(&'static str, Option<ExtractionOutcome>)>,
    pub instant: InstantDungeonOutcome,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let hunter = config.hunter();
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(&hunter, &mut rng);

        if config.verbosity >= 2 {
            let cleared = run.dungeons.iter().filter(|d| d.success).count();
            let raised = run
                .extractions
                .iter()
                .filter(|(_, o)| o.as_ref().is_some_and(|o| o.success))
                .count();
            println!(
                "Run {}/{} - Gates cleared {}/{}, Shadows raised {}, Instant fights won {}/{}",
                run_idx + 1,
                config.num_runs,
                cleared,
                run.dungeons.len(),
                raised,
                run.instant.victories(),
                run.instant.planned_encounters
            );
        }

        all_runs.push(run);
    }

    SimReport::from_runs(config, player_combat_power(&hunter), &all_runs)
}

pub fn simulate_single_run(hunter: &PlayerSnapshot, rng: &mut impl Rng) -> RunStats {
    let dungeons = HunterRank::all()
        .iter()
        .map(|rank| enter_dungeon(hunter, *rank, rng))
        .collect();

    let extractions = ENEMY_TABLE
        .iter()
        .map(|enemy| {
            let attempt = ExtractionAttempt::for_enemy(enemy.name);
            (enemy.name, extract_shadow(hunter, &attempt, rng).ok())
        })
        .collect();

    let instant = run_instant_dungeon(player_combat_power(hunter), hunter.level, rng);

    RunStats {
        dungeons,
        extractions,
        instant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_run_covers_everything() {
        let hunter = SimConfig {
            mana: 500,
            ..Default::default()
        }
        .hunter();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let run = simulate_single_run(&hunter, &mut rng);
        assert_eq!(run.dungeons.len(), 6);
        assert_eq!(run.extractions.len(), ENEMY_TABLE.len());
        // 500 mana cannot pay for a Dragon
        assert!(run.extractions[4].1.is_none());
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let config = SimConfig {
            num_runs: 5,
            seed: Some(42),
            verbosity: 0,
            ..Default::default()
        };
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.to_json(), b.to_json());
    }
}
