//! In-memory high-score store.

use super::error::StoreError;
use crate::game::HighScoreStore;

/// A [`HighScoreStore`] that lives and dies with the process.
///
/// Useful for demos and as a stand-in when no persistence is wanted. The
/// `broken` constructor makes every operation fail, for exercising the
/// storage-unavailable paths.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: Option<u32>,
    broken: bool,
}

impl MemoryStore {
    /// An empty, working store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a value.
    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            broken: false,
        }
    }

    /// A store whose every operation reports unavailability.
    pub fn broken() -> Self {
        Self {
            value: None,
            broken: true,
        }
    }

    /// The currently held value, if any.
    pub fn value(&self) -> Option<u32> {
        self.value
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> Result<Option<u32>, StoreError> {
        if self.broken {
            return Err(StoreError::unavailable("memory store marked broken"));
        }
        Ok(self.value)
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        if self.broken {
            return Err(StoreError::unavailable("memory store marked broken"));
        }
        self.value = Some(score);
        Ok(())
    }
}
