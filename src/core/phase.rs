//! Game lifecycle phases and immutable transition history.
//!
//! The phases are the states of the controller's machine. The history is a
//! pure value: recording a transition returns a new history, so snapshots
//! taken at any point stay stable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The lifecycle phase of a game session.
///
/// ```text
/// Idle ──start──▶ Countdown ──▶ Playback ──▶ AwaitingInput
///                     ▲             ▲              │ input
///                     │             └── next round │
///                  start            RoundEvaluation ◀┘
///                     │               │ mismatch
///                  GameOver ◀─────────┘
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session has started yet.
    Idle,
    /// A session was started; playback begins after a fixed delay.
    Countdown,
    /// The target sequence is being flashed back to the player.
    Playback,
    /// The player is reproducing the sequence.
    AwaitingInput,
    /// The latest input is being judged, or the next round is pending.
    RoundEvaluation,
    /// The session ended on a mismatch.
    GameOver,
}

impl GamePhase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Countdown => "Countdown",
            Self::Playback => "Playback",
            Self::AwaitingInput => "AwaitingInput",
            Self::RoundEvaluation => "RoundEvaluation",
            Self::GameOver => "GameOver",
        }
    }

    /// Whether a new session may start from this phase.
    pub fn accepts_start(&self) -> bool {
        matches!(self, Self::Idle | Self::GameOver)
    }

    /// Whether player input is meaningful in this phase.
    ///
    /// Input also lands during [`RoundEvaluation`](Self::RoundEvaluation);
    /// the controller treats that as a mismatch rather than ignoring it,
    /// since a completed attempt has no room left to extend.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::AwaitingInput | Self::RoundEvaluation)
    }
}

/// Record of a single phase transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// The phase being transitioned from.
    pub from: GamePhase,
    /// The phase being transitioned to.
    pub to: GamePhase,
    /// When the transition occurred.
    pub at: DateTime<Utc>,
}

/// Ordered, immutable history of phase transitions.
///
/// `record` does not mutate: it returns a new history with the transition
/// appended.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use simon_says::core::{GamePhase, PhaseHistory, PhaseTransition};
///
/// let history = PhaseHistory::new();
/// let history = history.record(PhaseTransition {
///     from: GamePhase::Idle,
///     to: GamePhase::Countdown,
///     at: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![&GamePhase::Idle, &GamePhase::Countdown]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseHistory {
    transitions: Vec<PhaseTransition>,
}

impl PhaseHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// The path of phases traversed: the initial phase, then the target of
    /// every transition in order.
    pub fn path(&self) -> Vec<&GamePhase> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// All recorded transitions, in order.
    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }

    /// Wall-clock span from the first to the last transition.
    ///
    /// `None` until at least one transition has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.at.signed_duration_since(first.at).to_std().ok()
    }
}
