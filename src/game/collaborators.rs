//! Collaborator trait seams.
//!
//! The controller never talks to a real screen, speaker, or disk. It talks
//! to these traits, and the application decides what stands behind them.
//! Tests stand mocks behind them, so every scenario in this crate runs
//! without a platform.

use crate::core::Signal;
use crate::game::error::AudioError;
use crate::store::StoreError;

/// The visual surface of the game.
///
/// Implementations are free to animate however they like; `flash` is one
/// call per signal shown, whether during playback or as input feedback.
pub trait GameDisplay {
    fn show_score(&mut self, score: u32);
    fn show_high_score(&mut self, score: u32);
    fn show_message(&mut self, text: &str);
    fn set_start_label(&mut self, label: &str);
    fn set_start_enabled(&mut self, enabled: bool);
    fn flash(&mut self, signal: Signal);
}

/// Sound effects for signals and for the end of a session.
///
/// Both calls may fail (no device, playback refused); the controller
/// swallows and logs failures, so implementations should report rather
/// than panic.
pub trait AudioPlayer {
    fn play(&mut self, signal: Signal) -> Result<(), AudioError>;
    fn play_failure(&mut self) -> Result<(), AudioError>;
}

/// Persistence for the single high-score integer.
///
/// `load` distinguishes "nothing stored yet" (`Ok(None)`) from "storage
/// broke" (`Err`). Either way the in-memory value stays authoritative for
/// the session; store failures never affect gameplay.
pub trait HighScoreStore {
    fn load(&mut self) -> Result<Option<u32>, StoreError>;
    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

/// Everything the controller needs from the platform, as one bound.
///
/// Blanket-implemented, so a single application struct that implements the
/// three collaborator traits is already a `GameEnv`.
pub trait GameEnv: GameDisplay + AudioPlayer + HighScoreStore {}

impl<T: GameDisplay + AudioPlayer + HighScoreStore> GameEnv for T {}
