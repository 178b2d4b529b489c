//! Hunter stats, leveling, power rating, and progression.

pub mod leveling;
pub mod player;
pub mod power;
pub mod progression;
pub mod rank;
pub mod stats;

pub use leveling::*;
pub use player::*;
pub use power::*;
pub use progression::*;
pub use rank::*;
pub use stats::*;
