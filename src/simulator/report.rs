//! Simulation report generation.

use super::config::SimConfig;
use super::runner::RunStats;
use crate::character::HunterRank;
use crate::items::Rarity;
use serde::Serialize;
use std::collections::BTreeMap;

/// How one gate rank played out across all runs.
#[derive(Debug, Clone, Serialize)]
pub struct RankSummary {
    pub rank: HunterRank,
    pub required_power: u32,
    pub clear_rate: f64,
    pub avg_success_rate: f64,
    pub avg_experience: f64,
    pub drop_rate: f64,
    pub avg_damage: f64,
    pub avg_clear_time_secs: f64,
}

/// How extraction against one enemy played out across all runs.
#[derive(Debug, Clone, Serialize)]
pub struct EnemySummary {
    pub enemy: String,
    /// Fraction of runs where the mana cost could not be paid.
    pub refused_rate: f64,
    pub final_success_rate: f64,
    pub observed_success_rate: f64,
    pub avg_shadow_attack: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstantSummary {
    pub avg_planned_encounters: f64,
    pub avg_victories: f64,
    pub clear_rate: f64,
    pub avg_experience: f64,
    pub avg_extractable: f64,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub player_level: u32,
    pub player_power: u64,
    pub ranks: Vec<RankSummary>,
    pub enemies: Vec<EnemySummary>,
    pub instant: InstantSummary,
    /// Dungeon drops keyed by rarity name.
    pub drop_rarities: BTreeMap<String, u32>,
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0u32), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

impl SimReport {
    /// Create a new report from completed runs.
    pub fn from_runs(config: &SimConfig, player_power: u64, runs: &[RunStats]) -> Self {
        let num_runs = runs.len() as u32;
        let per_run = num_runs.max(1) as f64;

        let ranks = HunterRank::all()
            .iter()
            .enumerate()
            .map(|(idx, rank)| {
                let outcomes: Vec<_> = runs.iter().filter_map(|r| r.dungeons.get(idx)).collect();
                let cleared = outcomes.iter().filter(|o| o.success).count();
                RankSummary {
                    rank: *rank,
                    required_power: rank.required_power(),
                    clear_rate: cleared as f64 / per_run,
                    avg_success_rate: mean(outcomes.iter().map(|o| o.success_rate)),
                    avg_experience: mean(outcomes.iter().map(|o| o.experience_gained as f64)),
                    drop_rate: outcomes.iter().filter(|o| o.equipment_drop.is_some()).count()
                        as f64
                        / cleared.max(1) as f64,
                    avg_damage: mean(outcomes.iter().map(|o| o.damage_taken as f64)),
                    avg_clear_time_secs: mean(
                        outcomes
                            .iter()
                            .filter_map(|o| o.clear_time_secs)
                            .map(|t| t as f64),
                    ),
                }
            })
            .collect();

        let mut enemies: Vec<EnemySummary> = Vec::new();
        if let Some(first) = runs.first() {
            for (idx, (name, _)) in first.extractions.iter().enumerate() {
                let attempts: Vec<_> = runs
                    .iter()
                    .filter_map(|r| r.extractions.get(idx))
                    .collect();
                let paid: Vec<_> = attempts.iter().filter_map(|(_, o)| o.as_ref()).collect();
                let refused = attempts.len() - paid.len();
                enemies.push(EnemySummary {
                    enemy: name.to_string(),
                    refused_rate: refused as f64 / per_run,
                    final_success_rate: paid.first().map_or(0.0, |o| o.final_success_rate),
                    observed_success_rate: paid.iter().filter(|o| o.success).count() as f64
                        / paid.len().max(1) as f64,
                    avg_shadow_attack: mean(
                        paid.iter()
                            .filter_map(|o| o.shadow.as_ref())
                            .map(|s| s.stats.attack as f64),
                    ),
                });
            }
        }

        let instant = InstantSummary {
            avg_planned_encounters: mean(runs.iter().map(|r| r.instant.planned_encounters as f64)),
            avg_victories: mean(runs.iter().map(|r| r.instant.victories() as f64)),
            clear_rate: runs.iter().filter(|r| r.instant.cleared()).count() as f64 / per_run,
            avg_experience: mean(runs.iter().map(|r| r.instant.total_experience as f64)),
            avg_extractable: mean(
                runs.iter()
                    .map(|r| r.instant.extractable_enemies().len() as f64),
            ),
        };

        let mut drop_rarities: BTreeMap<String, u32> = Rarity::all()
            .iter()
            .map(|r| (r.name().to_string(), 0))
            .collect();
        for item in runs
            .iter()
            .flat_map(|r| r.dungeons.iter())
            .filter_map(|o| o.equipment_drop.as_ref())
        {
            *drop_rarities.entry(item.rarity.name().to_string()).or_insert(0) += 1;
        }

        Self {
            num_runs,
            player_level: config.player_level,
            player_power,
            ranks,
            enemies,
            instant,
            drop_rarities,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {}, Hunter level {}, Combat power {}\n\n",
            self.num_runs, self.player_level, self.player_power
        ));

        report.push_str("── GATES ────────────────────────────────────────────────────────\n");
        report.push_str("  Rank  Required   Clear%   AvgRate   Exp     Drop%   Damage\n");
        report.push_str("  ────  ────────   ──────   ───────   ─────   ─────   ──────\n");
        for r in &self.ranks {
            report.push_str(&format!(
                "  {:>4}  {:>8}   {:>5.1}%   {:>7.3}   {:>5.0}   {:>4.1}%   {:>6.1}\n",
                r.rank.name(),
                r.required_power,
                r.clear_rate * 100.0,
                r.avg_success_rate,
                r.avg_experience,
                r.drop_rate * 100.0,
                r.avg_damage
            ));
        }
        report.push('\n');

        report.push_str("── SHADOW EXTRACTION ────────────────────────────────────────────\n");
        for e in &self.enemies {
            if e.refused_rate >= 1.0 {
                report.push_str(&format!("  {:<14} not enough mana\n", e.enemy));
                continue;
            }
            report.push_str(&format!(
                "  {:<14} rate {:>5.1}%  observed {:>5.1}%  avg attack {:.0}\n",
                e.enemy,
                e.final_success_rate * 100.0,
                e.observed_success_rate * 100.0,
                e.avg_shadow_attack
            ));
        }
        report.push('\n');

        report.push_str("── INSTANT DUNGEON ──────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Encounters:      {:.1}\n",
            self.instant.avg_planned_encounters
        ));
        report.push_str(&format!(
            "  Avg Victories:       {:.1}\n",
            self.instant.avg_victories
        ));
        report.push_str(&format!(
            "  Clear Rate:          {:.1}%\n",
            self.instant.clear_rate * 100.0
        ));
        report.push_str(&format!(
            "  Avg Experience:      {:.0}\n",
            self.instant.avg_experience
        ));
        report.push_str(&format!(
            "  Avg Extractable:     {:.2}\n\n",
            self.instant.avg_extractable
        ));

        report.push_str("── DROPS BY RARITY ──────────────────────────────────────────────\n");
        let total: u32 = self.drop_rarities.values().sum();
        for rarity in Rarity::all() {
            let count = self.drop_rarities.get(rarity.name()).copied().unwrap_or(0);
            let pct = count as f64 / total.max(1) as f64 * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!(
                "  {:<10} {:>5} {:>5.1}% {}\n",
                rarity.name(),
                count,
                pct,
                bar
            ));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
