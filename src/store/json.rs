//! JSON-file high-score store.

use super::error::StoreError;
use super::HIGH_SCORE_KEY;
use crate::game::HighScoreStore;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A [`HighScoreStore`] backed by a small JSON document on disk.
///
/// The document is an object with the score under [`HIGH_SCORE_KEY`]:
///
/// ```json
/// { "simon_game_high_score": 12 }
/// ```
///
/// A missing file or a missing/mistyped key loads as `Ok(None)`; only an
/// unreadable file or unparseable JSON is an error, and callers treat even
/// those as non-fatal.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store that reads and writes `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&mut self) -> Result<Option<u32>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let document: serde_json::Value = serde_json::from_str(&text)?;
        Ok(document
            .get(HIGH_SCORE_KEY)
            .and_then(serde_json::Value::as_u64)
            .and_then(|score| u32::try_from(score).ok()))
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let document = serde_json::json!({ HIGH_SCORE_KEY: score });
        fs::write(&self.path, serde_json::to_string_pretty(&document)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("simon-says-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn missing_file_loads_as_absent() {
        let mut store = JsonFileStore::new(temp_path("missing"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_path("round-trip");
        let mut store = JsonFileStore::new(&path);

        store.save(23).unwrap();
        assert_eq!(store.load().unwrap(), Some(23));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn document_uses_the_fixed_key() {
        let path = temp_path("key");
        let mut store = JsonFileStore::new(&path);

        store.save(9).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains(HIGH_SCORE_KEY));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn mistyped_key_loads_as_absent() {
        let path = temp_path("mistyped");
        fs::write(&path, r#"{ "simon_game_high_score": "twelve" }"#).unwrap();

        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.load().unwrap(), None);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn unparseable_document_is_an_error() {
        let path = temp_path("garbage");
        fs::write(&path, "not json at all").unwrap();

        let mut store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Malformed(_))));

        let _ = fs::remove_file(path);
    }
}
