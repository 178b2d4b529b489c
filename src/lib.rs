//! Shadow Monarch - hunter progression and simulation engine.
//!
//! Pure game rules for a dungeon-hunter RPG: stat growth and leveling,
//! combat power, loot, dungeon and instant-dungeon combat, shadow
//! extraction, the daily quest and its penalty zone, and equipment
//! enhancement. Every operation takes the caller's snapshot by reference
//! and returns an outcome; persistence belongs to the caller. Probabilistic
//! operations take an injected `rand::Rng`.

pub mod character;
pub mod core;
pub mod dungeon;
pub mod enhancement;
pub mod error;
pub mod items;
pub mod quests;
pub mod rankings;
pub mod shadows;
pub mod simulator;

pub use error::{EngineError, Resource, Result};
