//! Validated construction of game controllers.

use crate::core::Difficulty;
use crate::game::collaborators::GameEnv;
use crate::game::config::GameConfig;
use crate::game::controller::{GameController, LABEL_START};
use crate::game::error::BuildError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builder for a [`GameController`] with a fluent API.
///
/// `build` validates the timing config, loads the stored high score (a
/// broken store is a warning, not a failure), and primes the display, so
/// the returned controller is ready for `start_game`.
pub struct GameBuilder<R: Rng = StdRng> {
    config: GameConfig,
    difficulty: Difficulty,
    rng: R,
}

impl GameBuilder<StdRng> {
    /// Create a builder with default timings, medium difficulty, and an
    /// entropy-seeded RNG.
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            difficulty: Difficulty::default(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for GameBuilder<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameBuilder<R> {
    /// Override the timing configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the starting difficulty.
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Replace the signal RNG. Seed it for reproducible sequences.
    pub fn rng<R2: Rng>(self, rng: R2) -> GameBuilder<R2> {
        GameBuilder {
            config: self.config,
            difficulty: self.difficulty,
            rng,
        }
    }

    /// Validate, load the high score, prime the display, and hand over a
    /// controller in `Idle`.
    pub fn build<E: GameEnv>(self, env: &mut E) -> Result<GameController<R>, BuildError> {
        if self.config.countdown_delay.is_zero() {
            return Err(BuildError::ZeroCountdownDelay);
        }
        if self.config.base_interval.is_zero() {
            return Err(BuildError::ZeroBaseInterval);
        }
        if self.config.round_pause.is_zero() {
            return Err(BuildError::ZeroRoundPause);
        }

        let high_score = match env.load() {
            Ok(stored) => stored.unwrap_or(0),
            Err(err) => {
                log::warn!("high score not loaded: {err}");
                0
            }
        };

        env.show_high_score(high_score);
        env.show_score(0);
        env.set_start_label(LABEL_START);
        env.set_start_enabled(true);

        Ok(GameController::new(
            self.config,
            self.difficulty,
            self.rng,
            high_score,
        ))
    }
}
