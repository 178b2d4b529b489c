use crate::items::Rarity;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A defeated enemy kind that can be raised as a shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub shadow_type: &'static str,
    pub rarity: Rarity,
    pub base_stat: u32,
    pub base_success_rate: f64,
    pub mana_cost: u32,
}

pub const ENEMY_TABLE: [EnemyTemplate; 5] = [
    EnemyTemplate {
        name: "Goblin",
        shadow_type: "Basic Monster",
        rarity: Rarity::Common,
        base_stat: 150,
        base_success_rate: 0.8,
        mana_cost: 50,
    },
    EnemyTemplate {
        name: "Hobgoblin",
        shadow_type: "Elite Monster",
        rarity: Rarity::Rare,
        base_stat: 300,
        base_success_rate: 0.65,
        mana_cost: 100,
    },
    EnemyTemplate {
        name: "Ice Elf",
        shadow_type: "Magical Creature",
        rarity: Rarity::Epic,
        base_stat: 600,
        base_success_rate: 0.5,
        mana_cost: 200,
    },
    EnemyTemplate {
        name: "Demon Soldier",
        shadow_type: "Infernal Warrior",
        rarity: Rarity::Legendary,
        base_stat: 1200,
        base_success_rate: 0.3,
        mana_cost: 400,
    },
    EnemyTemplate {
        name: "Dragon",
        shadow_type: "Ancient Beast",
        rarity: Rarity::Mythic,
        base_stat: 2500,
        base_success_rate: 0.15,
        mana_cost: 800,
    },
];

/// Looks up an enemy by name, ignoring case. Unknown names fall back to
/// the weakest entry.
pub fn enemy_template(name: &str) -> &'static EnemyTemplate {
    ENEMY_TABLE
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
        .unwrap_or(&ENEMY_TABLE[0])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowStats {
    pub attack: u32,
    pub defense: u32,
    pub hp: u32,
    pub mp: u32,
}

/// A raised shadow soldier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowUnit {
    pub id: Uuid,
    pub owner_id: String,
    pub name: String,
    pub shadow_type: String,
    pub rarity: Rarity,
    pub level: u32,
    pub stats: ShadowStats,
    pub loyalty: u32,
    pub experience: u64,
    pub max_experience: u64,
}

impl ShadowUnit {
    pub fn can_upgrade(&self) -> bool {
        self.experience >= self.max_experience
            && self.level < crate::core::constants::SHADOW_MAX_LEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_and_unknown() {
        assert_eq!(enemy_template("Ice Elf").base_stat, 600);
        assert_eq!(enemy_template("dragon").mana_cost, 800);
        assert_eq!(enemy_template("Slime").name, "Goblin");
    }

    #[test]
    fn test_table_is_ordered_by_difficulty() {
        for pair in ENEMY_TABLE.windows(2) {
            assert!(pair[0].base_stat < pair[1].base_stat);
            assert!(pair[0].base_success_rate > pair[1].base_success_rate);
            assert!(pair[0].mana_cost < pair[1].mana_cost);
            assert!(pair[0].rarity < pair[1].rarity);
        }
    }
}
