pub mod inning;
pub mod roster;
pub mod scoreboard;
pub mod snapshot;

// Re-export main components
pub use inning::*;
pub use roster::*;
pub use scoreboard::*;
pub use snapshot::*;
