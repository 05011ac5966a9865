//! The imperative shell.
//!
//! Everything with a side effect lives here: the lifecycle
//! [`GameController`], the collaborator traits it drives, the cooperative
//! [`Scheduler`], and the validated [`GameBuilder`]. The shell holds no
//! platform handles; the application passes its environment into each call
//! and decides what a flash, a sound, or a saved score actually is.

mod builder;
mod collaborators;
mod config;
mod controller;
mod error;
mod event;
mod input;
mod scheduler;

pub use builder::GameBuilder;
pub use collaborators::{AudioPlayer, GameDisplay, GameEnv, HighScoreStore};
pub use config::GameConfig;
pub use controller::{GameController, GameSession};
pub use error::{AudioError, BuildError};
pub use event::GameEvent;
pub use input::InputMap;
pub use scheduler::{Scheduler, TimerQueue, TimerToken};
