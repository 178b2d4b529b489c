//! Dungeon combat resolution: ranked gates and instant dungeons.

pub mod combat;
pub mod instant;
pub mod types;

pub use combat::*;
pub use instant::*;
pub use types::*;
