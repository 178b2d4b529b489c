//! Item system: types, generation, and equip planning.

pub mod equipment;
pub mod generation;
pub mod types;

pub use equipment::*;
pub use generation::*;
pub use types::*;
