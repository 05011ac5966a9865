//! A scripted session from start to game over.
//!
//! The "platform" here is a console: the display prints, the speaker
//! prints, and the high score lives in memory. The player echoes three
//! rounds perfectly through an [`InputMap`] keyboard, then fumbles.
//!
//! Run with: cargo run --example walkthrough

use rand::rngs::StdRng;
use rand::SeedableRng;
use simon_says::core::Signal;
use simon_says::game::{
    AudioError, AudioPlayer, GameBuilder, GameConfig, GameDisplay, HighScoreStore, InputMap,
};
use simon_says::store::{MemoryStore, StoreError};

struct Console {
    store: MemoryStore,
}

impl GameDisplay for Console {
    fn show_score(&mut self, score: u32) {
        println!("[score] {score}");
    }
    fn show_high_score(&mut self, score: u32) {
        println!("[best]  {score}");
    }
    fn show_message(&mut self, text: &str) {
        println!("[game]  {text}");
    }
    fn set_start_label(&mut self, label: &str) {
        println!("[start] label = {label:?}");
    }
    fn set_start_enabled(&mut self, enabled: bool) {
        println!("[start] enabled = {enabled}");
    }
    fn flash(&mut self, signal: Signal) {
        println!("        *{signal}*");
    }
}

impl AudioPlayer for Console {
    fn play(&mut self, signal: Signal) -> Result<(), AudioError> {
        println!("        (tone: {signal})");
        Ok(())
    }
    fn play_failure(&mut self) -> Result<(), AudioError> {
        println!("        (tone: wrong)");
        Ok(())
    }
}

impl HighScoreStore for Console {
    fn load(&mut self) -> Result<Option<u32>, StoreError> {
        self.store.load()
    }
    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.store.save(score)
    }
}

fn key_for(signal: Signal) -> char {
    match signal {
        Signal::Green => 'g',
        Signal::Red => 'r',
        Signal::Yellow => 'y',
        Signal::Blue => 'b',
    }
}

fn main() {
    let keyboard: InputMap<char> = Signal::ALL
        .into_iter()
        .map(|signal| (key_for(signal), signal))
        .collect();

    let mut env = Console {
        store: MemoryStore::new(),
    };
    let mut game = GameBuilder::new()
        .rng(StdRng::seed_from_u64(2024))
        .build(&mut env)
        .unwrap();

    println!("\n=== pressing start ===");
    game.start_game(&mut env);
    game.advance(GameConfig::DEFAULT_COUNTDOWN_DELAY, &mut env);

    for round in 1..=3u32 {
        println!("\n=== round {round}: watch ===");
        let flashes = game.engine().sequence().len() as u32 + 1;
        game.advance(GameConfig::DEFAULT_BASE_INTERVAL * flashes, &mut env);

        println!("=== round {round}: repeat ===");
        for signal in game.engine().sequence().to_vec() {
            let key = key_for(signal);
            let pressed = keyboard.resolve(&key).unwrap();
            println!("        player presses '{key}'");
            game.handle_input(pressed, &mut env);
        }
        game.advance(GameConfig::DEFAULT_ROUND_PAUSE, &mut env);
    }

    println!("\n=== round 4: watch ===");
    let flashes = game.engine().sequence().len() as u32 + 1;
    game.advance(GameConfig::DEFAULT_BASE_INTERVAL * flashes, &mut env);

    println!("=== round 4: fumble ===");
    let expected = game.engine().sequence()[0];
    let wrong_key = key_for(Signal::ALL
        .into_iter()
        .find(|signal| *signal != expected)
        .unwrap());
    println!("        player presses '{wrong_key}'");
    game.handle_input(keyboard.resolve(&wrong_key).unwrap(), &mut env);

    println!("\nfinal score {}, best {}", game.score(), game.high_score());
    println!("phases visited: {}", game.history().transitions().len());
}
