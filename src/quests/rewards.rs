use crate::character::Stats;
use crate::core::constants::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestType {
    Daily,
    Weekly,
    Monthly,
    Story,
    Special,
}

impl QuestType {
    pub fn all() -> [QuestType; 5] {
        [
            QuestType::Daily,
            QuestType::Weekly,
            QuestType::Monthly,
            QuestType::Story,
            QuestType::Special,
        ]
    }

    pub fn base_experience(&self) -> u64 {
        match self {
            QuestType::Daily => 1000,
            QuestType::Weekly => 5000,
            QuestType::Monthly => 20000,
            QuestType::Story => 10000,
            QuestType::Special => 15000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestRewards {
    pub experience: u64,
    pub items: Vec<String>,
    pub stat_bonus: Stats,
}

pub fn calculate_quest_rewards(quest_type: QuestType, rng: &mut impl Rng) -> QuestRewards {
    let mut rewards = QuestRewards {
        experience: quest_type.base_experience(),
        items: Vec::new(),
        stat_bonus: Stats::zero(),
    };

    match quest_type {
        QuestType::Daily => {
            if rng.gen::<f64>() < QUEST_DAILY_STRENGTH_CHANCE {
                rewards.stat_bonus.strength = 1;
            }
        }
        QuestType::Weekly => {
            if rng.gen::<f64>() < QUEST_WEEKLY_POTION_CHANCE {
                rewards.items.push("Health Potion".to_string());
            }
        }
        QuestType::Story => rewards.items.push("Skill Point".to_string()),
        QuestType::Monthly | QuestType::Special => {}
    }

    rewards
}
