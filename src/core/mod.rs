//! Pure game core.
//!
//! This module contains the side-effect-free half of the game:
//! - the [`Signal`] alphabet
//! - sequence generation and attempt validation via [`SequenceEngine`]
//! - [`Difficulty`] and its speed multipliers
//! - lifecycle [`GamePhase`]s and the immutable [`PhaseHistory`]
//!
//! Nothing here touches a clock, a display, or storage; randomness is
//! injected by callers. The imperative shell lives in [`crate::game`].

mod difficulty;
mod phase;
mod sequence;
mod signal;

pub use difficulty::Difficulty;
pub use phase::{GamePhase, PhaseHistory, PhaseTransition};
pub use sequence::SequenceEngine;
pub use signal::Signal;
