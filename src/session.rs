//! Snapshot storage
//!
//! This module defines the trait through which scoreboards persist their
//! state. A store maps string keys to string values, the same shape as a
//! browser's local storage, and each game variant keeps its whole snapshot
//! under one key.

use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::Error;

/// Trait for reading and writing snapshots by key
///
/// Managers read their variant's key once when they are opened and write
/// the full snapshot back after every change. Implementations only move
/// strings around; parsing and validation happen in the game state.
pub trait Storage {
    /// Reads the value stored under `key`
    ///
    /// Called once per manager on construction. Whatever comes back is
    /// decoded and validated by the caller, which falls back to the initial
    /// state if the value is unusable.
    ///
    /// # Arguments
    ///
    /// * `key` - The storage key of one game variant, such as
    ///   `"nomx.gameState"`
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if the store could not be read. A missing key
    /// is `Ok(None)`, not an error.
    fn load(&self, key: &str) -> Result<Option<String>, Error>;

    /// Replaces the value stored under `key`
    ///
    /// The previous value is overwritten as a whole. A failed save leaves the
    /// caller's in-memory state as it is, so the next successful save
    /// catches the store up.
    ///
    /// # Arguments
    ///
    /// * `key` - The storage key of one game variant
    /// * `value` - The encoded snapshot
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if the value could not be written.
    fn save(&mut self, key: &str, value: &str) -> Result<(), Error>;
}

/// Storage kept in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Peeks at the raw value under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Puts a raw value under `key`, bypassing any game logic
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Storage writing one JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Uses `root` as the storage directory; it is created on first save
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the snapshot files
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, Error> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), Error> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_memory_missing_key() {
        assert_eq!(MemoryStorage::new().load("nomx.gameState"), Ok(None));
    }

    #[test]
    fn test_memory_save_and_load() {
        let mut storage = MemoryStorage::new();
        storage.save("k", "v1").unwrap();
        storage.save("k", "v2").unwrap();

        assert_eq!(storage.load("k"), Ok(Some("v2".to_string())));
        assert_eq!(storage.get("k"), Some("v2"));
    }

    #[test]
    fn test_file_path_per_key() {
        let storage = FileStorage::new("/tmp/boards");
        assert_eq!(
            storage.path("squarex.gameState"),
            PathBuf::from("/tmp/boards/squarex.gameState.json")
        );
    }
}
