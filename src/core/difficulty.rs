//! Difficulty levels and their playback speed multipliers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Playback difficulty.
///
/// Difficulty only scales the gaps between playback flashes; the countdown
/// and the between-round pause are fixed. The multiplier table is explicit
/// rather than a lookup so the mapping is total by construction.
///
/// # Example
///
/// ```rust
/// use simon_says::core::Difficulty;
///
/// assert_eq!(Difficulty::Hard.speed_multiplier(), 0.5);
/// assert_eq!(Difficulty::from_label("easy"), Difficulty::Easy);
/// // Unknown labels fall back to the default speed.
/// assert_eq!(Difficulty::from_label("nightmare"), Difficulty::Medium);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Slower playback, longer gaps between flashes.
    Easy,
    #[default]
    Medium,
    /// Faster playback, half the default gap.
    Hard,
}

impl Difficulty {
    /// The factor applied to the base flash interval.
    pub fn speed_multiplier(&self) -> f64 {
        match self {
            Self::Easy => 1.5,
            Self::Medium => 1.0,
            Self::Hard => 0.5,
        }
    }

    /// Parse a difficulty label, falling back to [`Difficulty::Medium`].
    ///
    /// Labels come from untrusted UI state (a select control, a config
    /// file), so an unknown value selects the default rather than failing.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::default(),
        }
    }

    /// Get the difficulty's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
