//! Sequence generation and attempt validation.
//!
//! [`SequenceEngine`] owns the growing target sequence and the player's
//! in-progress attempt. It is the pure half of the game: no timers, no
//! collaborators, no I/O. Randomness is injected by the caller so every
//! behavior here is reproducible.

use super::signal::Signal;
use rand::Rng;

/// The target sequence and the attempt being matched against it.
///
/// Invariants maintained by the operations below:
/// - the sequence grows by exactly one signal per [`append_random`] call;
/// - the attempt never grows past the sequence (growing it further is a
///   caller bug, checked in debug builds only);
/// - validity is a prefix comparison, so an empty attempt is vacuously
///   valid.
///
/// [`append_random`]: SequenceEngine::append_random
///
/// # Example
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use simon_says::core::SequenceEngine;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut engine = SequenceEngine::new();
///
/// let first = engine.append_random(&mut rng);
/// engine.record_attempt(first);
///
/// assert!(engine.is_attempt_valid());
/// assert!(engine.is_round_complete());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceEngine {
    sequence: Vec<Signal>,
    attempt: Vec<Signal>,
}

impl SequenceEngine {
    /// Create an engine with an empty sequence and attempt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear both the sequence and the attempt.
    pub fn reset(&mut self) {
        self.sequence.clear();
        self.attempt.clear();
    }

    /// Append one uniformly chosen signal to the sequence and return it.
    pub fn append_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Signal {
        let signal = Signal::ALL[rng.gen_range(0..Signal::ALL.len())];
        self.sequence.push(signal);
        signal
    }

    /// Record one signal of the player's attempt.
    ///
    /// The attempt must still be shorter than the sequence; recording past
    /// the end is a caller bug, not a recoverable condition.
    pub fn record_attempt(&mut self, signal: Signal) {
        debug_assert!(
            self.attempt.len() < self.sequence.len(),
            "attempt recorded past the end of the sequence"
        );
        self.attempt.push(signal);
    }

    /// Empty the attempt without touching the sequence.
    ///
    /// Called at the start of every input phase.
    pub fn clear_attempt(&mut self) {
        self.attempt.clear();
    }

    /// Whether every attempted signal matches the sequence at its index.
    ///
    /// True for the empty attempt and for any correct strict prefix; false
    /// from the first divergence onward.
    pub fn is_attempt_valid(&self) -> bool {
        self.attempt
            .iter()
            .zip(self.sequence.iter())
            .all(|(attempted, expected)| attempted == expected)
    }

    /// Whether the attempt has covered the whole sequence.
    pub fn is_round_complete(&self) -> bool {
        self.attempt.len() == self.sequence.len()
    }

    /// The current target sequence.
    pub fn sequence(&self) -> &[Signal] {
        &self.sequence
    }

    /// The player's in-progress attempt.
    pub fn attempt(&self) -> &[Signal] {
        &self.attempt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_engine_is_empty_and_vacuously_valid() {
        let engine = SequenceEngine::new();
        assert!(engine.sequence().is_empty());
        assert!(engine.attempt().is_empty());
        assert!(engine.is_attempt_valid());
        assert!(engine.is_round_complete());
    }

    #[test]
    fn append_random_grows_sequence_by_one() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut engine = SequenceEngine::new();

        for round in 1..=10 {
            engine.append_random(&mut rng);
            assert_eq!(engine.sequence().len(), round);
        }
    }

    #[test]
    fn append_random_returns_the_appended_signal() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut engine = SequenceEngine::new();

        let signal = engine.append_random(&mut rng);
        assert_eq!(engine.sequence(), &[signal]);
    }

    #[test]
    fn zero_rng_always_picks_the_first_signal() {
        let mut rng = StepRng::new(0, 0);
        let mut engine = SequenceEngine::new();

        engine.append_random(&mut rng);
        engine.append_random(&mut rng);
        assert_eq!(engine.sequence(), &[Signal::Green, Signal::Green]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut engine = SequenceEngine::new();

        engine.append_random(&mut rng);
        engine.record_attempt(Signal::Red);
        engine.reset();

        assert!(engine.sequence().is_empty());
        assert!(engine.attempt().is_empty());
        assert!(engine.is_attempt_valid());
    }

    #[test]
    fn matching_prefix_is_valid_but_incomplete() {
        let mut rng = StepRng::new(0, 0);
        let mut engine = SequenceEngine::new();
        engine.append_random(&mut rng);
        engine.append_random(&mut rng);

        engine.record_attempt(Signal::Green);

        assert!(engine.is_attempt_valid());
        assert!(!engine.is_round_complete());
    }

    #[test]
    fn divergence_is_detected_at_any_index() {
        let mut rng = StepRng::new(0, 0);
        let mut engine = SequenceEngine::new();
        engine.append_random(&mut rng);
        engine.append_random(&mut rng);

        engine.record_attempt(Signal::Green);
        engine.record_attempt(Signal::Blue);

        assert!(!engine.is_attempt_valid());
    }

    #[test]
    fn full_correct_attempt_completes_the_round() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut engine = SequenceEngine::new();
        for _ in 0..5 {
            engine.append_random(&mut rng);
        }

        for signal in engine.sequence().to_vec() {
            engine.record_attempt(signal);
        }

        assert!(engine.is_attempt_valid());
        assert!(engine.is_round_complete());
    }

    #[test]
    fn clear_attempt_keeps_the_sequence() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut engine = SequenceEngine::new();
        engine.append_random(&mut rng);
        engine.record_attempt(Signal::Red);

        engine.clear_attempt();

        assert_eq!(engine.sequence().len(), 1);
        assert!(engine.attempt().is_empty());
        assert!(engine.is_attempt_valid());
    }

    #[test]
    #[should_panic(expected = "past the end")]
    #[cfg(debug_assertions)]
    fn recording_past_the_sequence_panics_in_debug() {
        let mut engine = SequenceEngine::new();
        engine.record_attempt(Signal::Green);
    }
}
