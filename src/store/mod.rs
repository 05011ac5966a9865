//! High-score persistence.
//!
//! The only state that outlives a session is one integer. Two stores are
//! provided: [`MemoryStore`] for demos and tests, and [`JsonFileStore`]
//! for a real file on disk. Both implement
//! [`HighScoreStore`](crate::game::HighScoreStore), and both fail softly:
//! the controller logs and plays on.

mod error;
mod json;
mod memory;

pub use error::StoreError;
pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// The fixed identifier the high score is stored under.
pub const HIGH_SCORE_KEY: &str = "simon_game_high_score";
