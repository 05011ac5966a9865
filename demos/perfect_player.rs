//! A player that never misses, for watching the sequence grow.
//!
//! Every collaborator is a no-op except the score display; the point is
//! the controller's pacing under virtual time.
//!
//! Run with: cargo run --example perfect_player

use rand::rngs::StdRng;
use rand::SeedableRng;
use simon_says::core::{Difficulty, Signal};
use simon_says::game::{
    AudioError, AudioPlayer, GameBuilder, GameConfig, GameDisplay, HighScoreStore,
};
use simon_says::store::{MemoryStore, StoreError};

struct Silent {
    store: MemoryStore,
}

impl GameDisplay for Silent {
    fn show_score(&mut self, _score: u32) {}
    fn show_high_score(&mut self, _score: u32) {}
    fn show_message(&mut self, _text: &str) {}
    fn set_start_label(&mut self, _label: &str) {}
    fn set_start_enabled(&mut self, _enabled: bool) {}
    fn flash(&mut self, _signal: Signal) {}
}

impl AudioPlayer for Silent {
    fn play(&mut self, _signal: Signal) -> Result<(), AudioError> {
        Ok(())
    }
    fn play_failure(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
}

impl HighScoreStore for Silent {
    fn load(&mut self) -> Result<Option<u32>, StoreError> {
        self.store.load()
    }
    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.store.save(score)
    }
}

fn main() {
    let mut env = Silent {
        store: MemoryStore::new(),
    };
    let mut game = GameBuilder::new()
        .rng(StdRng::seed_from_u64(7))
        .difficulty(Difficulty::Hard)
        .build(&mut env)
        .unwrap();

    game.start_game(&mut env);
    game.advance(GameConfig::DEFAULT_COUNTDOWN_DELAY, &mut env);

    let gap = GameConfig::default().playback_gap(Difficulty::Hard);
    for round in 1..=20u32 {
        game.advance(gap * (round + 1), &mut env);
        for signal in game.engine().sequence().to_vec() {
            game.handle_input(signal, &mut env);
        }

        let sequence: Vec<&str> = game.engine().sequence().iter().map(Signal::name).collect();
        println!("round {:>2}: score {:>2}  [{}]", round, game.score(), sequence.join(" "));

        game.advance(GameConfig::DEFAULT_ROUND_PAUSE, &mut env);
    }

    println!("\nstopped voluntarily at score {}", game.score());
}
