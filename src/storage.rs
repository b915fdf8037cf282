//! Persistence for user-added questions
//!
//! Custom questions belong to the device, not the session, so they outlive
//! resets. Storage is best effort: a missing or corrupt blob loads as an empty
//! list and failed writes are logged and dropped, never surfaced to gameplay.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Fixed namespace the custom question list is stored under
pub const CUSTOM_QUESTIONS_KEY: &str = "ml_customQuestions_v1";

/// Load/save capability for the custom question list
pub trait QuestionStore {
    /// Load the stored list; never fails, degrades to empty
    fn load(&self) -> Vec<String>;

    /// Persist the full list, replacing whatever was stored
    fn save(&self, questions: &[String]);
}

/// Parse a stored blob, treating anything but a JSON array of strings as empty
fn parse_blob(blob: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(blob) {
        Ok(questions) => questions,
        Err(e) => {
            tracing::warn!("Ignoring malformed custom question data: {}", e);
            Vec::new()
        }
    }
}

/// Stores the list as a JSON array in `<dir>/ml_customQuestions_v1.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", CUSTOM_QUESTIONS_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_save(&self, questions: &[String]) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create data directory: {e}"))?;
        }
        let json = serde_json::to_string(questions)
            .map_err(|e| format!("Failed to serialize custom questions: {e}"))?;
        std::fs::write(&self.path, json)
            .map_err(|e| format!("Failed to write custom questions: {e}"))?;
        Ok(())
    }
}

impl QuestionStore for JsonFileStore {
    fn load(&self) -> Vec<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(blob) if blob.trim().is_empty() => Vec::new(),
            Ok(blob) => parse_blob(&blob),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!(
                    "Failed to read custom questions from {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, questions: &[String]) {
        if let Err(e) = self.try_save(questions) {
            tracing::warn!("{} ({})", e, self.path.display());
        }
    }
}

/// In-memory store; clones share the same backing blob
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a raw stored blob (which may be malformed)
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Arc::new(Mutex::new(Some(blob.into()))),
        }
    }

    /// The raw blob as it would sit in storage
    pub fn blob(&self) -> Option<String> {
        self.blob.lock().ok().and_then(|b| b.clone())
    }
}

impl QuestionStore for MemoryStore {
    fn load(&self) -> Vec<String> {
        self.blob().map(|b| parse_blob(&b)).unwrap_or_default()
    }

    fn save(&self, questions: &[String]) {
        let json = match serde_json::to_string(questions) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize custom questions: {}", e);
                return;
            }
        };
        match self.blob.lock() {
            Ok(mut blob) => *blob = Some(json),
            Err(_) => tracing::warn!("Custom question store lock poisoned, dropping save"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.load().is_empty());

        store.save(&["Favorite color?".to_string(), "Best snack?".to_string()]);
        assert!(store.path().ends_with("ml_customQuestions_v1.json"));

        let reopened = JsonFileStore::new(dir.path());
        assert_eq!(reopened.load(), vec!["Favorite color?", "Best snack?"]);
    }

    #[test]
    fn test_file_store_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("data"));
        store.save(&["q".to_string()]);
        assert_eq!(store.load(), vec!["q"]);
    }

    #[test]
    fn test_file_store_malformed_data_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        std::fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().is_empty());

        std::fs::write(store.path(), r#"{"questions": ["a"]}"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_store_write_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the data directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let store = JsonFileStore::new(&blocker);

        store.save(&["lost".to_string()]);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_memory_store_shares_blob_between_clones() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.save(&["a".to_string()]);
        assert_eq!(other.load(), vec!["a"]);
        assert_eq!(other.blob().as_deref(), Some(r#"["a"]"#));
    }

    #[test]
    fn test_memory_store_malformed_blob() {
        let store = MemoryStore::with_blob("42");
        assert!(store.load().is_empty());
    }
}
