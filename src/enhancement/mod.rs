//! Equipment enhancement (+1 through +10), paid for in experience.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
