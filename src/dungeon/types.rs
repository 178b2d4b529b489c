use crate::character::HunterRank;
use crate::items::EquipmentItem;
use serde::{Deserialize, Serialize};

/// Result of a single-resolution dungeon run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DungeonCombatOutcome {
    pub rank: HunterRank,
    pub success: bool,
    pub required_power: u32,
    pub success_rate: f64,
    pub experience_gained: u64,
    pub equipment_drop: Option<EquipmentItem>,
    /// Seconds taken to clear; `None` when the run failed.
    pub clear_time_secs: Option<u32>,
    pub damage_taken: u32,
}

/// One fight inside an instant dungeon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub enemy_name: String,
    pub enemy_power: u64,
    pub victory: bool,
    pub experience_gained: u64,
    /// Defeated and eligible for a shadow extraction attempt.
    pub extractable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstantDungeonOutcome {
    pub planned_encounters: u32,
    /// Fights actually fought; the run stops at the first defeat.
    pub encounters: Vec<Encounter>,
    pub total_experience: u64,
}

impl InstantDungeonOutcome {
    pub fn cleared(&self) -> bool {
        self.encounters.len() as u32 == self.planned_encounters
            && self.encounters.iter().all(|e| e.victory)
    }

    pub fn victories(&self) -> usize {
        self.encounters.iter().filter(|e| e.victory).count()
    }

    pub fn extractable_enemies(&self) -> Vec<&str> {
        self.encounters
            .iter()
            .filter(|e| e.extractable)
            .map(|e| e.enemy_name.as_str())
            .collect()
    }
}
