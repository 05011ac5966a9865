//! Simon Says: a watch-and-repeat memory game engine.
//!
//! The game deals a growing sequence of colored signals, plays it back,
//! and checks that the player reproduces it exactly. This crate is built
//! on a "pure core, imperative shell" split:
//!
//! - [`core`] is pure: the [`Signal`](core::Signal) alphabet, the
//!   [`SequenceEngine`](core::SequenceEngine) that grows and validates the
//!   sequence, [`Difficulty`](core::Difficulty) speed settings, and the
//!   immutable [`PhaseHistory`](core::PhaseHistory).
//! - [`game`] is the shell: the [`GameController`](game::GameController)
//!   lifecycle machine, the collaborator traits it drives, and a
//!   cooperative virtual-time [`Scheduler`](game::Scheduler). The platform
//!   (screen, speaker, disk) stays behind narrow traits, so the whole
//!   game runs headless and deterministic.
//! - [`store`] persists the single high-score integer.
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::mock::StepRng;
//! use simon_says::core::{GamePhase, Signal};
//! use simon_says::game::{AudioError, AudioPlayer, GameBuilder, GameDisplay, HighScoreStore};
//! use simon_says::store::{MemoryStore, StoreError};
//! use std::time::Duration;
//!
//! // A throwaway platform: headless display and audio, in-memory store.
//! struct Headless(MemoryStore);
//!
//! impl GameDisplay for Headless {
//!     fn show_score(&mut self, _: u32) {}
//!     fn show_high_score(&mut self, _: u32) {}
//!     fn show_message(&mut self, _: &str) {}
//!     fn set_start_label(&mut self, _: &str) {}
//!     fn set_start_enabled(&mut self, _: bool) {}
//!     fn flash(&mut self, _: Signal) {}
//! }
//!
//! impl AudioPlayer for Headless {
//!     fn play(&mut self, _: Signal) -> Result<(), AudioError> { Ok(()) }
//!     fn play_failure(&mut self) -> Result<(), AudioError> { Ok(()) }
//! }
//!
//! impl HighScoreStore for Headless {
//!     fn load(&mut self) -> Result<Option<u32>, StoreError> { self.0.load() }
//!     fn save(&mut self, score: u32) -> Result<(), StoreError> { self.0.save(score) }
//! }
//!
//! let mut env = Headless(MemoryStore::new());
//! let mut game = GameBuilder::new().rng(StepRng::new(0, 0)).build(&mut env)?;
//!
//! game.start_game(&mut env);
//! game.advance(Duration::from_millis(1500), &mut env); // countdown
//! game.advance(Duration::from_millis(1200), &mut env); // playback of one signal
//! assert_eq!(game.phase(), GamePhase::AwaitingInput);
//!
//! game.handle_input(Signal::Green, &mut env); // StepRng(0, 0) always deals green
//! assert_eq!(game.score(), 1);
//! # Ok::<(), simon_says::game::BuildError>(())
//! ```

pub mod core;
pub mod game;
pub mod store;

// Re-export the types nearly every caller needs.
pub use crate::core::{Difficulty, GamePhase, SequenceEngine, Signal};
pub use crate::game::{GameBuilder, GameConfig, GameController, GameEnv};
pub use crate::store::{JsonFileStore, MemoryStore};
