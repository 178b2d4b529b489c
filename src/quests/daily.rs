//! Daily fitness quest: one record per hunter per UTC calendar day.

use crate::character::{apply_experience, PlayerSnapshot, ProgressionOutcome, Stats};
use crate::core::constants::*;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The quest day an instant belongs to. Days roll over at UTC midnight.
pub fn quest_date(now: DateTime<Utc>) -> NaiveDate {
    now.date_naive()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuestState {
    Pending,
    Completed,
    Penalty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyQuestRecord {
    pub player_id: String,
    pub date: NaiveDate,
    pub pushups: u32,
    pub situps: u32,
    pub running_km: f64,
    pub completed: bool,
    #[serde(default)]
    pub failed: bool,
    #[serde(default)]
    pub penalty_served: bool,
}

impl DailyQuestRecord {
    pub fn new(player_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            player_id: player_id.into(),
            date,
            pushups: 0,
            situps: 0,
            running_km: 0.0,
            completed: false,
            failed: false,
            penalty_served: false,
        }
    }

    /// A fresh record for the quest day containing `now`.
    pub fn for_today(player_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::new(player_id, quest_date(now))
    }

    pub fn is_for(&self, now: DateTime<Utc>) -> bool {
        self.date == quest_date(now)
    }

    pub fn quotas_met(&self) -> bool {
        self.pushups >= DAILY_PUSHUPS_TARGET
            && self.situps >= DAILY_SITUPS_TARGET
            && self.running_km >= DAILY_RUNNING_KM_TARGET
    }

    pub fn state(&self) -> QuestState {
        if self.completed {
            QuestState::Completed
        } else if self.failed {
            QuestState::Penalty
        } else {
            QuestState::Pending
        }
    }

    /// Overall progress in percent, each exercise weighted a third.
    pub fn progress_percent(&self) -> f64 {
        let pushups = self.pushups as f64 / DAILY_PUSHUPS_TARGET as f64 * 33.33;
        let situps = self.situps as f64 / DAILY_SITUPS_TARGET as f64 * 33.33;
        let running = self.running_km / DAILY_RUNNING_KM_TARGET * 33.34;
        (pushups + situps + running).min(100.0)
    }
}

/// Newly reported counts. Missing fields keep their stored values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyQuestProgress {
    pub pushups: Option<u32>,
    pub situps: Option<u32>,
    pub running_km: Option<f64>,
}

/// One-time reward for finishing the day's quest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyQuestReward {
    pub stat_bonus: Stats,
    pub progression: ProgressionOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyQuestUpdate {
    pub record: DailyQuestRecord,
    /// False when the record was already settled and nothing moved.
    pub changed: bool,
    /// Present only on the update that completes the quest.
    pub reward: Option<DailyQuestReward>,
}

fn clamp_km(km: f64) -> f64 {
    if km.is_nan() {
        0.0
    } else {
        km.clamp(0.0, DAILY_RUNNING_KM_TARGET)
    }
}

pub fn daily_stat_bonus() -> Stats {
    Stats {
        strength: DAILY_REWARD_STRENGTH,
        vitality: DAILY_REWARD_VITALITY,
        agility: DAILY_REWARD_AGILITY,
        ..Stats::zero()
    }
}

/// Stat bump plus experience, computed against the bumped stats so any
/// level-up recomputes pools with the new vitality.
pub fn daily_completion_reward(player: &PlayerSnapshot) -> DailyQuestReward {
    let stat_bonus = daily_stat_bonus();
    let mut bumped = player.clone();
    bumped.stats.add(&stat_bonus);
    DailyQuestReward {
        stat_bonus,
        progression: apply_experience(&bumped, DAILY_REWARD_EXPERIENCE),
    }
}

/// Records reported progress, clamping each counter to its quota.
///
/// Completed and failed records are frozen: later updates return them
/// unchanged and never grant the reward.
pub fn update_daily_quest(
    record: &DailyQuestRecord,
    progress: &DailyQuestProgress,
    player: &PlayerSnapshot,
) -> DailyQuestUpdate {
    if record.completed || record.failed {
        return DailyQuestUpdate {
            record: record.clone(),
            changed: false,
            reward: None,
        };
    }

    let mut next = record.clone();
    if let Some(pushups) = progress.pushups {
        next.pushups = pushups.min(DAILY_PUSHUPS_TARGET);
    }
    if let Some(situps) = progress.situps {
        next.situps = situps.min(DAILY_SITUPS_TARGET);
    }
    if let Some(km) = progress.running_km {
        next.running_km = clamp_km(km);
    }

    let reward = if next.quotas_met() {
        next.completed = true;
        tracing::info!(player = %next.player_id, date = %next.date, "daily quest completed");
        Some(daily_completion_reward(player))
    } else {
        None
    };

    DailyQuestUpdate {
        changed: next != *record,
        record: next,
        reward,
    }
}

impl PlayerSnapshot {
    pub fn apply_daily_reward(&mut self, reward: &DailyQuestReward) {
        self.stats.add(&reward.stat_bonus);
        self.apply_progression(&reward.progression);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    fn progress(p: u32, s: u32, km: f64) -> DailyQuestProgress {
        DailyQuestProgress {
            pushups: Some(p),
            situps: Some(s),
            running_km: Some(km),
        }
    }

    #[test]
    fn test_quest_date_is_utc() {
        let late = Utc.with_ymd_and_hms(2024, 3, 14, 23, 59, 59).unwrap();
        let early = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(quest_date(late), today());
        assert_ne!(quest_date(early), today());
    }

    #[test]
    fn test_counters_clamp() {
        let player = PlayerSnapshot::new("p", "Hunter");
        let record = DailyQuestRecord::new("p", today());
        let update = update_daily_quest(&record, &progress(150, 40, 12.5), &player);
        assert_eq!(update.record.pushups, 100);
        assert_eq!(update.record.situps, 40);
        assert!((update.record.running_km - 10.0).abs() < f64::EPSILON);
        assert!(!update.record.completed);
        assert!(update.reward.is_none());

        let odd = update_daily_quest(&record, &progress(0, 0, f64::NAN), &player);
        assert!((odd.record.running_km - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_not_accumulate() {
        let player = PlayerSnapshot::new("p", "Hunter");
        let mut record = DailyQuestRecord::new("p", today());
        record.pushups = 80;
        let update = update_daily_quest(
            &record,
            &DailyQuestProgress {
                pushups: Some(30),
                ..Default::default()
            },
            &player,
        );
        assert_eq!(update.record.pushups, 30);
    }

    #[test]
    fn test_completion_grants_reward_once() {
        let player = PlayerSnapshot::new("p", "Hunter");
        let record = DailyQuestRecord::new("p", today());
        let done = update_daily_quest(&record, &progress(100, 100, 10.0), &player);
        assert!(done.record.completed);
        assert_eq!(done.record.state(), QuestState::Completed);
        let reward = done.reward.unwrap();
        assert_eq!(reward.stat_bonus.strength, 2);
        assert_eq!(reward.stat_bonus.vitality, 1);
        assert_eq!(reward.stat_bonus.agility, 1);
        assert_eq!(reward.progression.new_experience, 1000);
        assert_eq!(reward.progression.new_level, 2);

        let again = update_daily_quest(&done.record, &progress(0, 0, 0.0), &player);
        assert!(!again.changed);
        assert!(again.record.completed);
        assert_eq!(again.record.pushups, 100);
        assert!(again.reward.is_none());
    }

    #[test]
    fn test_reward_vitals_use_bumped_vitality() {
        let mut player = PlayerSnapshot::new("p", "Hunter");
        let reward = daily_completion_reward(&player);
        // level 2, vitality 11: 100 + 220 + 20
        assert_eq!(reward.progression.vitals.unwrap().max_hp, 340);
        player.apply_daily_reward(&reward);
        assert_eq!(player.stats.strength, 12);
        assert_eq!(player.level, 2);
        assert_eq!(player.max_hp, 340);
    }

    #[test]
    fn test_progress_percent() {
        let mut record = DailyQuestRecord::new("p", today());
        assert!((record.progress_percent() - 0.0).abs() < f64::EPSILON);
        record.pushups = 50;
        assert!((record.progress_percent() - 16.665).abs() < 1e-9);
        record.pushups = 100;
        record.situps = 100;
        record.running_km = 10.0;
        assert!((record.progress_percent() - 100.0).abs() < 1e-9);
    }
}
