//! Penalty zone: a fixed two-hour survival window entered after an
//! unfinished daily quest.

use super::daily::DailyQuestRecord;
use crate::core::constants::PENALTY_DURATION_MINUTES;
use crate::core::random_uuid;
use crate::error::{EngineError, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "UPPERCASE")]
pub enum PenaltyStatus {
    Surviving { remaining_secs: i64 },
    Escaped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltySession {
    pub id: Uuid,
    pub player_id: String,
    pub quest_date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i64,
    /// Combat counters kept by the caller while the hunter survives.
    #[serde(default)]
    pub damage_taken: u32,
    #[serde(default)]
    pub centipedes_killed: u32,
}

impl PenaltySession {
    pub fn duration(&self) -> Duration {
        Duration::minutes(self.duration_minutes)
    }

    /// Time spent inside, never negative even if the clock went backwards.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        (now - self.start_time).max(Duration::zero())
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.duration() - self.elapsed(now)).max(Duration::zero())
    }

    pub fn status(&self, now: DateTime<Utc>) -> PenaltyStatus {
        let remaining = self.duration() - self.elapsed(now);
        if remaining <= Duration::zero() {
            PenaltyStatus::Escaped
        } else {
            PenaltyStatus::Surviving {
                remaining_secs: remaining.num_seconds(),
            }
        }
    }

    pub fn has_escaped(&self, now: DateTime<Utc>) -> bool {
        self.status(now) == PenaltyStatus::Escaped
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyEntry {
    /// The day's record with `failed` set.
    pub record: DailyQuestRecord,
    pub session: PenaltySession,
}

/// Sends the hunter into the penalty zone for today's unfinished quest.
pub fn enter_penalty_zone(
    record: &DailyQuestRecord,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Result<PenaltyEntry> {
    if record.completed {
        return Err(EngineError::invalid("daily quest already completed"));
    }
    if !record.is_for(now) {
        return Err(EngineError::invalid(format!(
            "quest record for {} is not today's",
            record.date
        )));
    }
    if record.failed {
        return Err(EngineError::invalid("penalty already entered for this day"));
    }

    let mut failed = record.clone();
    failed.failed = true;
    let session = PenaltySession {
        id: random_uuid(rng),
        player_id: record.player_id.clone(),
        quest_date: record.date,
        start_time: now,
        duration_minutes: PENALTY_DURATION_MINUTES,
        damage_taken: 0,
        centipedes_killed: 0,
    };
    tracing::info!(player = %record.player_id, session = %session.id, "penalty zone entered");

    Ok(PenaltyEntry {
        record: failed,
        session,
    })
}

/// Marks the day's penalty as served once the session has run out.
pub fn serve_penalty(
    record: &DailyQuestRecord,
    session: &PenaltySession,
    now: DateTime<Utc>,
) -> Result<DailyQuestRecord> {
    if session.player_id != record.player_id || session.quest_date != record.date {
        return Err(EngineError::invalid("penalty session belongs to another quest"));
    }
    if !record.failed {
        return Err(EngineError::invalid("no penalty was entered for this quest"));
    }
    if let PenaltyStatus::Surviving { remaining_secs } = session.status(now) {
        return Err(EngineError::invalid(format!(
            "penalty still running, {remaining_secs}s left"
        )));
    }

    tracing::info!(player = %record.player_id, session = %session.id, "penalty zone escaped");
    let mut served = record.clone();
    served.penalty_served = true;
    Ok(served)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_cannot_enter_after_completion() {
        let mut record = DailyQuestRecord::for_today("p", noon());
        record.completed = true;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            enter_penalty_zone(&record, noon(), &mut rng),
            Err(EngineError::InvalidTransition(_))
        ));
    }

    #[test]
    fn test_cannot_enter_for_another_day() {
        let record = DailyQuestRecord::for_today("p", noon());
        let tomorrow = noon() + Duration::days(1);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(enter_penalty_zone(&record, tomorrow, &mut rng).is_err());
    }

    #[test]
    fn test_enter_twice_rejected() {
        let record = DailyQuestRecord::for_today("p", noon());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let entry = enter_penalty_zone(&record, noon(), &mut rng).unwrap();
        assert!(entry.record.failed);
        assert!(enter_penalty_zone(&entry.record, noon(), &mut rng).is_err());
    }

    #[test]
    fn test_status_follows_clock() {
        let record = DailyQuestRecord::for_today("p", noon());
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let session = enter_penalty_zone(&record, noon(), &mut rng).unwrap().session;

        assert_eq!(
            session.status(noon() + Duration::minutes(30)),
            PenaltyStatus::Surviving { remaining_secs: 90 * 60 }
        );
        assert_eq!(
            session.status(noon() - Duration::minutes(5)),
            PenaltyStatus::Surviving { remaining_secs: 120 * 60 }
        );
        assert_eq!(session.status(noon() + Duration::minutes(120)), PenaltyStatus::Escaped);
        assert_eq!(session.remaining(noon() + Duration::hours(5)), Duration::zero());
    }

    #[test]
    fn test_serve_requires_escape() {
        let record = DailyQuestRecord::for_today("p", noon());
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let entry = enter_penalty_zone(&record, noon(), &mut rng).unwrap();

        let early = serve_penalty(&entry.record, &entry.session, noon() + Duration::minutes(60));
        assert!(matches!(early, Err(EngineError::InvalidTransition(_))));

        let served = serve_penalty(
            &entry.record,
            &entry.session,
            noon() + Duration::minutes(121),
        )
        .unwrap();
        assert!(served.penalty_served);
        assert!(!served.completed);
    }
}
