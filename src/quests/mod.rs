//! Daily quest state machine, the penalty zone, and quest reward tables.

pub mod daily;
pub mod penalty;
pub mod rewards;

pub use daily::*;
pub use penalty::*;
pub use rewards::*;
