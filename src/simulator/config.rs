//! Simulation configuration.

use crate::character::{
    calculate_vitals, cumulative_experience_for_level, level_requirement, rank_from_level,
    PlayerSnapshot, Stats,
};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Level of the simulated hunter
    pub player_level: u32,

    /// Value assigned to each of the five stats
    pub stat_value: u32,

    /// Mana available before each extraction attempt
    pub mana: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            player_level: 1,
            stat_value: 10,
            mana: 1000,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick sanity pass for a fresh hunter
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            ..Default::default()
        }
    }

    /// Mid-game hunter around the C/B boundary
    pub fn mid_game() -> Self {
        Self {
            player_level: 30,
            stat_value: 120,
            mana: 2000,
            ..Default::default()
        }
    }

    /// Late-game hunter pushing S-rank gates
    pub fn late_game() -> Self {
        Self {
            player_level: 60,
            stat_value: 900,
            mana: 5000,
            ..Default::default()
        }
    }

    /// The hunter every run starts from.
    pub fn hunter(&self) -> PlayerSnapshot {
        let level = self.player_level.max(1);
        let stats = Stats::uniform(self.stat_value);
        let mut player = PlayerSnapshot::new("simulated-hunter", "Simulated Hunter");
        player.level = level;
        player.experience = cumulative_experience_for_level(level);
        player.experience_to_next = level_requirement(level);
        player.rank = rank_from_level(level);
        player.stats = stats;
        player.set_vitals(calculate_vitals(level, stats.vitality, stats.intelligence));
        player.mp = self.mana;
        player.max_mp = player.max_mp.max(self.mana);
        player
    }
}
