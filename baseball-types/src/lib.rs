pub mod dto;
pub mod game;
pub mod team;

// Re-export all types
pub use dto::*;
pub use game::*;
pub use team::*;
