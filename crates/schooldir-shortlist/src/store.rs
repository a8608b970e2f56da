//! Persisted shortlist storage.
//!
//! The shortlist owns a single named slot in a durable key-value store.
//! `ShortlistStore` abstracts that slot; the state machine is the only
//! writer, which rules out lost-update races between independent writers.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use schooldir_model::Result;

/// A single durable slot holding the serialized shortlist payload.
pub trait ShortlistStore {
    /// Read the slot. `Ok(None)` means the slot has never been written.
    fn load(&self) -> Result<Option<String>>;

    /// Overwrite the slot.
    fn save(&mut self, payload: &str) -> Result<()>;
}

/// In-memory store, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a payload, as if a previous session wrote it.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Some(payload.into()),
        }
    }

    /// The current slot content, for assertions.
    pub fn payload(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl ShortlistStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, payload: &str) -> Result<()> {
        self.slot = Some(payload.to_string());
        Ok(())
    }
}

/// File-backed store: one small JSON file per user profile.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ShortlistStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn save(&mut self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FileStore, MemoryStore, ShortlistStore};

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save("[\"a\"]").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("[\"a\"]"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("shortlist.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("shortlist.json"));
        store.save("[\"a\",\"b\"]").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("[\"a\",\"b\"]"));
    }
}
