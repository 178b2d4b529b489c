//! Shadow army: extraction from defeated enemies and shadow leveling.

pub mod extraction;
pub mod types;
pub mod upgrade;

pub use extraction::*;
pub use types::*;
pub use upgrade::*;
