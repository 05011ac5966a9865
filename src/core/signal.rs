//! The fixed signal alphabet.
//!
//! A [`Signal`] is one discrete playable color/tone unit. The alphabet is
//! closed: every sequence and every attempt is built from the same four
//! variants, and comparison is plain identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four playable signals.
///
/// Signals are cheap identity values: `Copy`, comparable, hashable, and
/// serializable so downstream state snapshots stay serializable too.
///
/// # Example
///
/// ```rust
/// use simon_says::core::Signal;
///
/// assert_eq!(Signal::ALL.len(), 4);
/// assert_eq!(Signal::Green.name(), "green");
/// assert_ne!(Signal::Green, Signal::Blue);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Green,
    Red,
    Yellow,
    Blue,
}

impl Signal {
    /// Every signal, in canonical board order.
    pub const ALL: [Signal; 4] = [Signal::Green, Signal::Red, Signal::Yellow, Signal::Blue];

    /// Get the signal's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_four_distinct_signals() {
        for (i, a) in Signal::ALL.iter().enumerate() {
            for (j, b) in Signal::ALL.iter().enumerate() {
                assert_eq!(i == j, a == b);
            }
        }
    }

    #[test]
    fn name_matches_variant() {
        assert_eq!(Signal::Green.name(), "green");
        assert_eq!(Signal::Red.name(), "red");
        assert_eq!(Signal::Yellow.name(), "yellow");
        assert_eq!(Signal::Blue.name(), "blue");
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Signal::Yellow.to_string(), "yellow");
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&Signal::Blue).unwrap();
        assert_eq!(json, "\"blue\"");

        let back: Signal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Signal::Blue);
    }
}
