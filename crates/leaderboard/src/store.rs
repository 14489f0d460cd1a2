//! Key-value persistence for the leaderboard
//!
//! The leaderboard is a single JSON blob under a fixed key. Backends only
//! move strings around; reading is tolerant (a missing or broken blob is an
//! empty leaderboard), writing reports its errors. A submission never writes
//! over a blob that could not be read.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::entry::LeaderboardEntry;
use crate::leaderboard::Leaderboard;
use crate::types::LEADERBOARD_KEY;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A local persistent string store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store, for tests and sessions that should not touch disk
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Directory-backed store: one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        // Atomic replace via a sibling temp file.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// The leaderboard as kept in a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct LeaderboardStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> LeaderboardStore<S> {
    /// Use the standard leaderboard key
    pub fn new(store: S) -> Self {
        Self::with_key(store, LEADERBOARD_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Load the leaderboard, substituting an empty one for absent or unreadable data.
    pub fn load(&self) -> Leaderboard {
        match self.read() {
            Ok(board) => board,
            Err(e) => {
                warn!(key = %self.key, error = %e, "leaderboard unreadable, starting empty");
                Leaderboard::new()
            }
        }
    }

    /// Like [`load`](Self::load), but a failed read is an error. Corrupted
    /// data still reads as an empty board.
    fn read(&self) -> Result<Leaderboard, StoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Leaderboard::new());
        };

        match serde_json::from_str::<Vec<LeaderboardEntry>>(&raw) {
            Ok(entries) => Ok(Leaderboard::from_entries(entries)),
            Err(e) => {
                warn!(key = %self.key, error = %e, "leaderboard corrupted, starting empty");
                Ok(Leaderboard::new())
            }
        }
    }

    pub fn save(&mut self, board: &Leaderboard) -> Result<(), StoreError> {
        let raw = serde_json::to_string(board.entries())?;
        self.store.set(&self.key, &raw)
    }

    /// Record `entry` and persist. Returns the updated board and the entry's 1-based rank.
    ///
    /// A store that cannot be read is left untouched.
    pub fn submit(&mut self, entry: LeaderboardEntry) -> Result<(Leaderboard, Option<usize>), StoreError> {
        let mut board = self.read()?;
        let name = entry.name.clone();
        let time_ms = entry.time_ms;
        let rank = board.submit(entry);
        self.save(&board)?;
        info!(%name, time_ms, ?rank, "leaderboard entry recorded");
        Ok((board, rank))
    }

    /// Remove the stored leaderboard entirely
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(name: &str, time_ms: u64) -> LeaderboardEntry {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        LeaderboardEntry::new(name, time_ms, 127, date)
    }

    #[test]
    fn test_absent_blob_loads_empty() {
        let store = LeaderboardStore::new(MemoryStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_corrupted_blob_loads_empty() {
        let mut mem = MemoryStore::new();
        mem.set(LEADERBOARD_KEY, "{not json").unwrap();
        let store = LeaderboardStore::new(mem);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let mut mem = MemoryStore::new();
        mem.set(LEADERBOARD_KEY, r#"{"name":"x"}"#).unwrap();
        let store = LeaderboardStore::new(mem);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_submit_persists() {
        let mut store = LeaderboardStore::new(MemoryStore::new());
        let (_, rank) = store.submit(entry("slow", 900)).unwrap();
        assert_eq!(rank, Some(1));
        let (board, rank) = store.submit(entry("fast", 300)).unwrap();
        assert_eq!(rank, Some(1));
        assert_eq!(board.len(), 2);

        let reloaded = store.load();
        assert_eq!(reloaded, board);
        assert_eq!(reloaded.entries()[0].name, "fast");
    }

    /// Fails every read; counts writes.
    #[derive(Default)]
    struct UnreadableStore {
        writes: usize,
    }

    impl KeyValueStore for UnreadableStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied").into())
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            self.writes += 1;
            Ok(())
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[test]
    fn test_unreadable_store_loads_empty() {
        let store = LeaderboardStore::new(UnreadableStore::default());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_submit_does_not_overwrite_unreadable_store() {
        let mut store = LeaderboardStore::new(UnreadableStore::default());
        let err = store.submit(entry("a", 1)).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert_eq!(store.store().writes, 0);
    }

    #[test]
    fn test_submit_replaces_corrupted_blob() {
        let mut mem = MemoryStore::new();
        mem.set(LEADERBOARD_KEY, "{not json").unwrap();
        let mut store = LeaderboardStore::new(mem);
        let (board, rank) = store.submit(entry("a", 1)).unwrap();
        assert_eq!(rank, Some(1));
        assert_eq!(store.load(), board);
    }

    #[test]
    fn test_unsorted_blob_is_normalized_on_load() {
        let entries: Vec<_> = (0..12u64).rev().map(|t| entry("n", t * 10)).collect();
        let mut mem = MemoryStore::new();
        mem.set(LEADERBOARD_KEY, &serde_json::to_string(&entries).unwrap())
            .unwrap();

        let board = LeaderboardStore::new(mem).load();
        assert_eq!(board.len(), 10);
        assert_eq!(board.entries()[0].time_ms, 0);
        assert_eq!(board.entries()[9].time_ms, 90);
    }

    #[test]
    fn test_clear_removes_blob() {
        let mut store = LeaderboardStore::new(MemoryStore::new());
        store.submit(entry("a", 1)).unwrap();
        store.clear().unwrap();
        assert!(store.store().get(LEADERBOARD_KEY).unwrap().is_none());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = FileStore::new(dir.path().join("nested"));
        assert_eq!(files.get("k").unwrap(), None);

        files.set("k", "[1,2]").unwrap();
        assert_eq!(files.get("k").unwrap().as_deref(), Some("[1,2]"));
        assert!(files.path_for("k").exists());

        files.remove("k").unwrap();
        files.remove("k").unwrap();
        assert_eq!(files.get("k").unwrap(), None);
    }
}
