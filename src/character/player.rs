use super::leveling::level_requirement;
use super::rank::HunterRank;
use super::stats::{StatType, Stats};
use crate::core::constants::*;
use crate::error::{EngineError, Resource, Result};
use crate::items::EquipmentItem;
use serde::{Deserialize, Serialize};

/// Current and maximum HP/MP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
}

/// Read-only view of a hunter as loaded by the persistence layer.
///
/// The engine never writes back to storage. Operations return outcomes; the
/// `apply_*` helpers exist so callers (and tests) can fold an outcome into
/// their own copy before persisting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: String,
    pub name: String,
    pub level: u32,
    /// Total accumulated experience.
    pub experience: u64,
    pub experience_to_next: u64,
    pub rank: HunterRank,
    pub stats: Stats,
    #[serde(default)]
    pub stat_points: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    #[serde(default)]
    pub equipment: Vec<EquipmentItem>,
    #[serde(default)]
    pub shadow_count: u32,
    #[serde(default = "default_shadow_capacity")]
    pub shadow_capacity: u32,
}

fn default_shadow_capacity() -> u32 {
    SHADOW_ARMY_BASE_CAPACITY
}

impl PlayerSnapshot {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level: STARTING_LEVEL,
            experience: 0,
            experience_to_next: level_requirement(STARTING_LEVEL),
            rank: HunterRank::E,
            stats: Stats::new(),
            stat_points: 0,
            hp: STARTING_HP,
            max_hp: STARTING_HP,
            mp: STARTING_MP,
            max_mp: STARTING_MP,
            equipment: Vec::new(),
            shadow_count: 0,
            shadow_capacity: SHADOW_ARMY_BASE_CAPACITY,
        }
    }

    pub fn vitals(&self) -> Vitals {
        Vitals {
            hp: self.hp,
            max_hp: self.max_hp,
            mp: self.mp,
            max_mp: self.max_mp,
        }
    }

    pub fn set_vitals(&mut self, vitals: Vitals) {
        self.hp = vitals.hp;
        self.max_hp = vitals.max_hp;
        self.mp = vitals.mp;
        self.max_mp = vitals.max_mp;
    }

    pub fn equipped(&self) -> impl Iterator<Item = &EquipmentItem> {
        self.equipment.iter().filter(|item| item.equipped)
    }
}

/// Stat points moved from the unspent pool into one stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatAllocation {
    pub stat: StatType,
    pub amount: u32,
    pub new_value: u32,
    pub remaining_points: u32,
}

pub fn allocate_stat_points(
    player: &PlayerSnapshot,
    stat: StatType,
    amount: u32,
) -> Result<StatAllocation> {
    if amount == 0 {
        return Err(EngineError::invalid("cannot allocate zero stat points"));
    }
    if player.stat_points < amount {
        return Err(EngineError::insufficient(
            Resource::StatPoints,
            amount as u64,
            player.stat_points as u64,
        ));
    }
    Ok(StatAllocation {
        stat,
        amount,
        new_value: player.stats.get(stat).saturating_add(amount),
        remaining_points: player.stat_points - amount,
    })
}

impl PlayerSnapshot {
    pub fn apply_allocation(&mut self, allocation: &StatAllocation) {
        self.stats.set(allocation.stat, allocation.new_value);
        self.stat_points = allocation.remaining_points;
    }
}
