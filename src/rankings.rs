//! Hunter leaderboard.

use crate::character::{player_combat_power, HunterRank, PlayerSnapshot};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub position: u32,
    pub player_id: String,
    pub name: String,
    pub level: u32,
    pub rank: HunterRank,
    pub combat_power: u64,
    pub shadow_count: u32,
}

/// Orders hunters by combat power, then level, then name.
pub fn rank_hunters(players: &[PlayerSnapshot]) -> Vec<RankingEntry> {
    let mut scored: Vec<(u64, &PlayerSnapshot)> = players
        .iter()
        .map(|p| (player_combat_power(p), p))
        .collect();
    scored.sort_by_key(|(power, p)| (Reverse(*power), Reverse(p.level), p.name.clone()));

    scored
        .into_iter()
        .enumerate()
        .map(|(idx, (combat_power, p))| RankingEntry {
            position: idx as u32 + 1,
            player_id: p.id.clone(),
            name: p.name.clone(),
            level: p.level,
            rank: p.rank,
            combat_power,
            shadow_count: p.shadow_count,
        })
        .collect()
}
