//! Key/value score storage backends.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Somewhere a score can be read from and written to by key
pub trait ScoreStore {
    fn load(&self, key: &str) -> Result<Option<u64>>;
    fn save(&mut self, key: &str, value: u64) -> Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
struct Entries(BTreeMap<String, u64>);

/// JSON object file holding one value per key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "score file not found");
                return Ok(Entries::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("read {}", self.path.display()));
            }
        };

        match serde_json::from_str(&text) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable score file");
                Ok(Entries::default())
            }
        }
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<u64>> {
        let entries = self.read_entries()?;
        Ok(entries.0.get(key).copied())
    }

    fn save(&mut self, key: &str, value: u64) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.0.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json).with_context(|| format!("write {}", self.path.display()))?;
        debug!(path = %self.path.display(), key, value, "score saved");
        Ok(())
    }
}

/// In-memory store, for tests and for running without a score file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, u64>,
}

impl MemoryStore {
    pub fn get(&self, key: &str) -> Option<u64> {
        self.values.get(key).copied()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<u64>> {
        Ok(self.get(key))
    }

    fn save(&mut self, key: &str, value: u64) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("scores.json"));
        assert_eq!(store.load("2048-best-score").unwrap(), None);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested").join("scores.json"));
        store.save("2048-best-score", 512).unwrap();
        assert_eq!(store.load("2048-best-score").unwrap(), Some(512));

        let text = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["2048-best-score"], 512);
    }

    #[test]
    fn save_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, r#"{"other": 7}"#).unwrap();

        let mut store = JsonFileStore::new(&path);
        store.save("2048-best-score", 64).unwrap();
        assert_eq!(store.load("other").unwrap(), Some(7));
        assert_eq!(store.load("2048-best-score").unwrap(), Some(64));
    }

    #[test]
    fn corrupt_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "not json").unwrap();

        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.load("2048-best-score").unwrap(), None);

        // Saving replaces the unreadable content
        store.save("2048-best-score", 8).unwrap();
        assert_eq!(store.load("2048-best-score").unwrap(), Some(8));
    }

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load("k").unwrap(), None);
        store.save("k", 3).unwrap();
        assert_eq!(store.get("k"), Some(3));
    }
}
