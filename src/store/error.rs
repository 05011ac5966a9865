//! Store error types.

use thiserror::Error;

/// Errors that can occur while loading or saving the high score.
///
/// Every variant is recoverable by design: callers log and keep the
/// in-memory value as the source of truth for the session.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage could not be reached.
    #[error("high score storage unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    /// The stored document was not valid JSON.
    #[error("stored high score is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl StoreError {
    /// An unavailability error with a plain-text reason.
    pub fn unavailable(reason: &str) -> Self {
        Self::Unavailable(std::io::Error::new(std::io::ErrorKind::Other, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_carries_the_reason() {
        let err = StoreError::unavailable("store disabled");
        assert_eq!(
            err.to_string(),
            "high score storage unavailable: store disabled"
        );
    }
}
