use crate::core::constants::{DUNGEON_REQUIRED_POWER, RANK_LEVEL_THRESHOLDS};
use serde::{Deserialize, Serialize};

/// Hunter tier, E (weakest) through S. Dungeons are graded on the same scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HunterRank {
    E = 0,
    D = 1,
    C = 2,
    B = 3,
    A = 4,
    S = 5,
}

impl HunterRank {
    pub fn all() -> [HunterRank; 6] {
        [
            HunterRank::E,
            HunterRank::D,
            HunterRank::C,
            HunterRank::B,
            HunterRank::A,
            HunterRank::S,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            HunterRank::E => "E",
            HunterRank::D => "D",
            HunterRank::C => "C",
            HunterRank::B => "B",
            HunterRank::A => "A",
            HunterRank::S => "S",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Power a hunter needs to clear a dungeon of this rank.
    pub fn required_power(&self) -> u32 {
        DUNGEON_REQUIRED_POWER[self.index()]
    }
}

impl std::fmt::Display for HunterRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub fn rank_from_level(level: u32) -> HunterRank {
    let tiers = HunterRank::all();
    RANK_LEVEL_THRESHOLDS
        .iter()
        .position(|&threshold| level < threshold)
        .map(|i| tiers[i])
        .unwrap_or(HunterRank::S)
}
