//! End-to-end session scenarios, driven tick by tick against a recording
//! environment.

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simon_says::core::{Difficulty, GamePhase, Signal};
use simon_says::game::{
    AudioError, AudioPlayer, GameBuilder, GameConfig, GameDisplay, HighScoreStore,
};
use simon_says::store::{MemoryStore, StoreError};
use std::time::Duration;

const COUNTDOWN: Duration = GameConfig::DEFAULT_COUNTDOWN_DELAY;
const GAP: Duration = GameConfig::DEFAULT_BASE_INTERVAL;
const PAUSE: Duration = GameConfig::DEFAULT_ROUND_PAUSE;

/// A platform that records everything the controller tells it.
#[derive(Default)]
struct Recording {
    store: MemoryStore,
    scores: Vec<u32>,
    high_scores: Vec<u32>,
    messages: Vec<String>,
    labels: Vec<String>,
    flashes: Vec<Signal>,
    sounds: Vec<Signal>,
    failure_sounds: usize,
}

impl Recording {
    fn with_store(store: MemoryStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }
}

impl GameDisplay for Recording {
    fn show_score(&mut self, score: u32) {
        self.scores.push(score);
    }
    fn show_high_score(&mut self, score: u32) {
        self.high_scores.push(score);
    }
    fn show_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
    fn set_start_label(&mut self, label: &str) {
        self.labels.push(label.to_string());
    }
    fn set_start_enabled(&mut self, _enabled: bool) {}
    fn flash(&mut self, signal: Signal) {
        self.flashes.push(signal);
    }
}

impl AudioPlayer for Recording {
    fn play(&mut self, signal: Signal) -> Result<(), AudioError> {
        self.sounds.push(signal);
        Ok(())
    }
    fn play_failure(&mut self) -> Result<(), AudioError> {
        self.failure_sounds += 1;
        Ok(())
    }
}

impl HighScoreStore for Recording {
    fn load(&mut self) -> Result<Option<u32>, StoreError> {
        self.store.load()
    }
    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.store.save(score)
    }
}

#[test]
fn first_round_with_a_fixed_deal() {
    let mut env = Recording::default();
    let mut game = GameBuilder::new()
        .rng(StepRng::new(0, 0)) // always deals green
        .build(&mut env)
        .unwrap();

    game.start_game(&mut env);
    assert_eq!(game.phase(), GamePhase::Countdown);
    assert_eq!(env.messages.last().unwrap(), "Get Ready!");

    game.advance(COUNTDOWN, &mut env);
    assert_eq!(game.phase(), GamePhase::Playback);
    assert_eq!(env.messages.last().unwrap(), "Watch!");
    assert_eq!(game.engine().sequence(), &[Signal::Green]);

    game.advance(GAP * 2, &mut env);
    assert_eq!(game.phase(), GamePhase::AwaitingInput);
    assert_eq!(env.messages.last().unwrap(), "Your turn!");
    assert_eq!(env.flashes, vec![Signal::Green]);
    assert_eq!(env.sounds, vec![Signal::Green]);

    game.handle_input(Signal::Green, &mut env);
    assert_eq!(game.score(), 1);
    assert_eq!(env.scores.last(), Some(&1));

    // After the pause the next round begins with a longer sequence.
    game.advance(PAUSE, &mut env);
    assert_eq!(game.phase(), GamePhase::Playback);
    assert_eq!(game.engine().sequence().len(), 2);
}

#[test]
fn a_wrong_first_input_ends_the_game_immediately() {
    let mut env = Recording::default();
    let mut game = GameBuilder::new()
        .rng(StepRng::new(0, 0))
        .build(&mut env)
        .unwrap();

    game.start_game(&mut env);
    game.advance(COUNTDOWN, &mut env);
    game.advance(GAP * 2, &mut env);

    game.handle_input(Signal::Blue, &mut env);

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(!game.is_active());
    assert_eq!(game.score(), 0);
    assert_eq!(env.failure_sounds, 1);
    assert_eq!(env.messages.last().unwrap(), "Game Over! Score: 0");
    assert_eq!(env.labels.last().unwrap(), "Start");
    // Nothing beaten, nothing persisted.
    assert_eq!(env.store.value(), None);
}

#[test]
fn a_lower_score_never_touches_the_stored_best() {
    let mut env = Recording::with_store(MemoryStore::with_value(5));
    let mut game = GameBuilder::new()
        .rng(StepRng::new(0, 0))
        .build(&mut env)
        .unwrap();
    assert_eq!(game.high_score(), 5);

    // One correct round, then a miss: final score 1, below the best of 5.
    game.start_game(&mut env);
    game.advance(COUNTDOWN, &mut env);
    game.advance(GAP * 2, &mut env);
    game.handle_input(Signal::Green, &mut env);
    game.advance(PAUSE, &mut env);
    game.advance(GAP * 3, &mut env);
    game.handle_input(Signal::Green, &mut env);
    game.handle_input(Signal::Blue, &mut env);

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.score(), 1);
    assert_eq!(game.high_score(), 5);
    assert_eq!(env.store.value(), Some(5));
    // The best-score display was only primed at build time.
    assert_eq!(env.high_scores, vec![5]);
}

#[test]
fn a_new_best_survives_into_the_next_controller() {
    let store = MemoryStore::new();
    let mut env = Recording::with_store(store);

    let mut game = GameBuilder::new()
        .rng(StepRng::new(0, 0))
        .build(&mut env)
        .unwrap();
    game.start_game(&mut env);
    game.advance(COUNTDOWN, &mut env);
    game.advance(GAP * 2, &mut env);
    game.handle_input(Signal::Green, &mut env);
    game.advance(PAUSE, &mut env);
    game.advance(GAP * 3, &mut env);
    game.handle_input(Signal::Green, &mut env);
    game.handle_input(Signal::Blue, &mut env); // miss halfway through round two

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.score(), 1);
    assert_eq!(env.store.value(), Some(1));

    // A fresh controller over the same store sees the new best.
    let rematch = GameBuilder::new().build(&mut env).unwrap();
    assert_eq!(rematch.high_score(), 1);
}

#[test]
fn hard_difficulty_halves_the_flash_spacing() {
    let mut env = Recording::default();
    let mut game = GameBuilder::new()
        .rng(StepRng::new(0, 0))
        .difficulty(Difficulty::Hard)
        .build(&mut env)
        .unwrap();

    game.start_game(&mut env);
    game.advance(COUNTDOWN, &mut env);
    assert_eq!(game.phase(), GamePhase::Playback);

    // Hard spacing is 300ms, not the default 600ms.
    game.advance(Duration::from_millis(299), &mut env);
    assert!(env.flashes.is_empty());
    game.advance(Duration::from_millis(1), &mut env);
    assert_eq!(env.flashes, vec![Signal::Green]);

    // One more gap and input opens.
    game.advance(Duration::from_millis(300), &mut env);
    assert_eq!(game.phase(), GamePhase::AwaitingInput);
}

#[test]
fn easy_difficulty_stretches_the_flash_spacing() {
    let mut env = Recording::default();
    let mut game = GameBuilder::new()
        .rng(StepRng::new(0, 0))
        .difficulty(Difficulty::Easy)
        .build(&mut env)
        .unwrap();

    game.start_game(&mut env);
    game.advance(COUNTDOWN, &mut env);

    game.advance(Duration::from_millis(899), &mut env);
    assert!(env.flashes.is_empty());
    game.advance(Duration::from_millis(1), &mut env);
    assert_eq!(env.flashes.len(), 1);
}

#[test]
fn a_perfect_player_runs_up_the_score() {
    let mut env = Recording::default();
    let mut game = GameBuilder::new()
        .rng(StdRng::seed_from_u64(0xC0FFEE))
        .build(&mut env)
        .unwrap();

    game.start_game(&mut env);
    game.advance(COUNTDOWN, &mut env);

    for round in 1..=8u32 {
        assert_eq!(game.engine().sequence().len(), round as usize);

        // Watch the whole playback, then echo the sequence back.
        game.advance(GAP * (round + 1), &mut env);
        assert_eq!(game.phase(), GamePhase::AwaitingInput);
        for signal in game.engine().sequence().to_vec() {
            game.handle_input(signal, &mut env);
        }
        assert_eq!(game.score(), round);

        game.advance(PAUSE, &mut env);
    }

    assert_eq!(game.phase(), GamePhase::Playback);
    assert_eq!(game.engine().sequence().len(), 9);
    assert!(game.is_active());
}

#[test]
fn playback_flashes_arrive_in_sequence_order() {
    let mut env = Recording::default();
    let mut game = GameBuilder::new()
        .rng(StdRng::seed_from_u64(99))
        .build(&mut env)
        .unwrap();

    game.start_game(&mut env);
    game.advance(COUNTDOWN, &mut env);

    // Round 1: echo it back correctly.
    game.advance(GAP * 2, &mut env);
    let first = game.engine().sequence().to_vec();
    game.handle_input(first[0], &mut env);
    game.advance(PAUSE, &mut env);

    // Round 2: the two playback flashes replay the sequence in order.
    env.flashes.clear();
    game.advance(GAP * 3, &mut env);
    assert_eq!(env.flashes, game.engine().sequence());
}
