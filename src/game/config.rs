//! Timing configuration.

use crate::core::Difficulty;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The fixed delays that drive a session.
///
/// Only the playback gap is scaled by difficulty; the countdown and the
/// between-round pause are constant.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use simon_says::core::Difficulty;
/// use simon_says::game::GameConfig;
///
/// let config = GameConfig::default();
/// // Hard difficulty halves the default 600ms spacing.
/// assert_eq!(
///     config.flash_offset(0, Difficulty::Hard),
///     Duration::from_millis(300)
/// );
/// assert_eq!(
///     config.flash_offset(1, Difficulty::Hard),
///     Duration::from_millis(600)
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Delay between starting a game and the first playback.
    pub countdown_delay: Duration,
    /// Gap between playback flashes before difficulty scaling.
    pub base_interval: Duration,
    /// Pause between a completed round and the next playback.
    pub round_pause: Duration,
}

impl GameConfig {
    pub const DEFAULT_COUNTDOWN_DELAY: Duration = Duration::from_millis(1500);
    pub const DEFAULT_BASE_INTERVAL: Duration = Duration::from_millis(600);
    pub const DEFAULT_ROUND_PAUSE: Duration = Duration::from_millis(1000);

    /// The difficulty-scaled gap between consecutive playback flashes.
    pub fn playback_gap(&self, difficulty: Difficulty) -> Duration {
        self.base_interval.mul_f64(difficulty.speed_multiplier())
    }

    /// Offset of the flash for sequence position `index`, measured from
    /// playback entry.
    ///
    /// Offsets grow strictly with `index`, which is what keeps flashes
    /// observable in sequence order. The offset at `index == len` is the
    /// moment playback is over and input opens.
    pub fn flash_offset(&self, index: usize, difficulty: Difficulty) -> Duration {
        self.playback_gap(difficulty) * (index as u32 + 1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            countdown_delay: Self::DEFAULT_COUNTDOWN_DELAY,
            base_interval: Self::DEFAULT_BASE_INTERVAL,
            round_pause: Self::DEFAULT_ROUND_PAUSE,
        }
    }
}
