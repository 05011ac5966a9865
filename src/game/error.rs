//! Shell error types.

use thiserror::Error;

/// Errors that can occur when building a game controller.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("countdown delay must be non-zero")]
    ZeroCountdownDelay,

    #[error("base flash interval must be non-zero; flash ordering depends on it")]
    ZeroBaseInterval,

    #[error("between-round pause must be non-zero")]
    ZeroRoundPause,
}

/// A sound that could not be played.
///
/// Audio is feedback, never control flow: the controller logs these and
/// keeps going, and visual feedback still occurs.
#[derive(Debug, Error)]
#[error("audio playback failed: {reason}")]
pub struct AudioError {
    reason: String,
}

impl AudioError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_errors_name_the_offending_field() {
        assert!(BuildError::ZeroCountdownDelay
            .to_string()
            .contains("countdown"));
        assert!(BuildError::ZeroBaseInterval.to_string().contains("interval"));
        assert!(BuildError::ZeroRoundPause.to_string().contains("pause"));
    }

    #[test]
    fn audio_error_carries_its_reason() {
        let err = AudioError::new("no output device");
        assert_eq!(err.to_string(), "audio playback failed: no output device");
    }
}
