//! Game balance simulator for Monte Carlo analysis.
//!
//! Run thousands of simulated attempts to analyze:
//! - Gate clear rates and rewards per rank
//! - Shadow extraction odds per enemy
//! - Instant dungeon survival and extraction opportunities
//! - Dungeon drop rarity spread

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{EnemySummary, InstantSummary, RankSummary, SimReport};
pub use runner::{run_simulation, simulate_single_run, RunStats};
