//! Persistence backends for board stores.
//!
//! A board is persisted as one JSON document, `{"seq": N, "items": [...]}`.
//! Backends sit behind the [`StoreBackend`] trait so the store logic never
//! touches the filesystem directly and a different engine can be swapped in
//! without changing the store's contract.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::Post;
use crate::{MoredentError, Result};

/// Persisted shape of one board: the sequence counter and the post list.
///
/// `seq` only ever grows, so ids are never reused even after deletions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreData {
    /// Last assigned post id.
    pub seq: u64,
    /// Posts in insertion order.
    #[serde(default)]
    pub items: Vec<Post>,
}

/// Backing storage for a board store.
///
/// `load` must always produce a usable [`StoreData`]: a backend recovers
/// from missing, empty, or corrupt data by resetting to the empty shape
/// instead of propagating the corruption.
pub trait StoreBackend {
    /// Read the whole store.
    fn load(&self) -> Result<StoreData>;

    /// Replace the whole store.
    fn save(&self, data: &StoreData) -> Result<()>;
}

/// JSON-file-backed store, one file per board.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given file path. The file is created lazily
    /// on first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reset the file to the empty shape and return it.
    fn reset(&self) -> Result<StoreData> {
        let empty = StoreData::default();
        self.save(&empty)?;
        Ok(empty)
    }
}

impl StoreBackend for JsonFileStore {
    fn load(&self) -> Result<StoreData> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return self.reset(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "board store unreadable, resetting");
                return self.reset();
            }
        };

        if bytes.is_empty() {
            return self.reset();
        }

        match serde_json::from_slice(&bytes) {
            Ok(data) => Ok(data),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "board store corrupt, resetting");
                self.reset()
            }
        }
    }

    fn save(&self, data: &StoreData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec_pretty(data)
            .map_err(|e| MoredentError::Storage(format!("failed to serialize store: {e}")))?;

        // Whole-document replace: sibling temp file, then rename.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory backend, used by tests and ephemeral stores.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<StoreData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryStore {
    fn load(&self) -> Result<StoreData> {
        Ok(self.data.lock().expect("memory store poisoned").clone())
    }

    fn save(&self, data: &StoreData) -> Result<()> {
        *self.data.lock().expect("memory store poisoned") = data.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("notice.json"))
    }

    #[test]
    fn test_load_missing_file_initializes_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let data = store.load().unwrap();
        assert_eq!(data, StoreData::default());
        // The empty shape is persisted back.
        assert!(store.path().exists());
    }

    #[test]
    fn test_load_empty_file_initializes_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), b"").unwrap();

        let data = store.load().unwrap();
        assert_eq!(data.seq, 0);
        assert!(data.items.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_self_heals() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), b"{not valid json").unwrap();

        let data = store.load().unwrap();
        assert_eq!(data, StoreData::default());

        // The file itself was healed, not just the in-memory copy.
        let raw = fs::read_to_string(store.path()).unwrap();
        let reparsed: StoreData = serde_json::from_str(&raw).unwrap();
        assert_eq!(reparsed, StoreData::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let data = StoreData {
            seq: 2,
            items: Vec::new(),
        };
        store.save(&data).unwrap();
        assert_eq!(store.load().unwrap().seq, 2);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("data").join("news.json"));
        store.save(&StoreData::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&StoreData::default()).unwrap();
        assert!(!store.path().with_extension("tmp").exists());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), StoreData::default());

        let data = StoreData {
            seq: 5,
            items: Vec::new(),
        };
        store.save(&data).unwrap();
        assert_eq!(store.load().unwrap().seq, 5);
    }
}
