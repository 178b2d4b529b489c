use crate::core::constants::{BASE_STAT_VALUE, NUM_STATS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatType {
    Strength,
    Agility,
    Intelligence,
    Vitality,
    Sense,
}

impl StatType {
    pub fn all() -> [StatType; NUM_STATS] {
        [
            StatType::Strength,
            StatType::Agility,
            StatType::Intelligence,
            StatType::Vitality,
            StatType::Sense,
        ]
    }

    pub fn abbrev(&self) -> &str {
        match self {
            StatType::Strength => "STR",
            StatType::Agility => "AGI",
            StatType::Intelligence => "INT",
            StatType::Vitality => "VIT",
            StatType::Sense => "SEN",
        }
    }
}

/// The five hunter stats. Also used as a delta (stat bumps from rewards).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub strength: u32,
    pub agility: u32,
    pub intelligence: u32,
    pub vitality: u32,
    pub sense: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    pub fn new() -> Self {
        Self::uniform(BASE_STAT_VALUE)
    }

    pub fn uniform(value: u32) -> Self {
        Self {
            strength: value,
            agility: value,
            intelligence: value,
            vitality: value,
            sense: value,
        }
    }

    pub fn zero() -> Self {
        Self::uniform(0)
    }

    pub fn get(&self, stat: StatType) -> u32 {
        match stat {
            StatType::Strength => self.strength,
            StatType::Agility => self.agility,
            StatType::Intelligence => self.intelligence,
            StatType::Vitality => self.vitality,
            StatType::Sense => self.sense,
        }
    }

    pub fn set(&mut self, stat: StatType, value: u32) {
        match stat {
            StatType::Strength => self.strength = value,
            StatType::Agility => self.agility = value,
            StatType::Intelligence => self.intelligence = value,
            StatType::Vitality => self.vitality = value,
            StatType::Sense => self.sense = value,
        }
    }

    /// Adds another Stats' values to this one (for reward bumps).
    pub fn add(&mut self, other: &Stats) {
        for stat in StatType::all() {
            self.set(stat, self.get(stat).saturating_add(other.get(stat)));
        }
    }

    pub fn total(&self) -> u32 {
        StatType::all().iter().map(|s| self.get(*s)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_start_at_ten() {
        let stats = Stats::new();
        for stat in StatType::all() {
            assert_eq!(stats.get(stat), 10);
        }
    }

    #[test]
    fn test_get_set() {
        let mut stats = Stats::new();
        stats.set(StatType::Sense, 16);
        assert_eq!(stats.get(StatType::Sense), 16);
        assert_eq!(stats.get(StatType::Strength), 10);
    }

    #[test]
    fn test_add_combines_stats() {
        let mut base = Stats::new();
        let bump = Stats {
            strength: 2,
            vitality: 1,
            agility: 1,
            ..Stats::zero()
        };
        base.add(&bump);

        assert_eq!(base.strength, 12);
        assert_eq!(base.agility, 11);
        assert_eq!(base.vitality, 11);
        assert_eq!(base.intelligence, 10);
        assert_eq!(base.sense, 10);
    }

    #[test]
    fn test_add_saturates() {
        let mut stats = Stats::uniform(u32::MAX);
        stats.add(&Stats::uniform(1));
        assert_eq!(stats.strength, u32::MAX);
    }

    #[test]
    fn test_total() {
        assert_eq!(Stats::new().total(), 50);
        assert_eq!(Stats::zero().total(), 0);
    }

    #[test]
    fn test_abbrev() {
        assert_eq!(StatType::Strength.abbrev(), "STR");
        assert_eq!(StatType::Agility.abbrev(), "AGI");
        assert_eq!(StatType::Intelligence.abbrev(), "INT");
        assert_eq!(StatType::Vitality.abbrev(), "VIT");
        assert_eq!(StatType::Sense.abbrev(), "SEN");
    }

    #[test]
    fn test_serializes_with_full_stat_names() {
        let json = serde_json::to_string(&Stats::new()).unwrap();
        assert!(json.contains("\"strength\":10"));
        assert!(json.contains("\"sense\":10"));
    }
}
