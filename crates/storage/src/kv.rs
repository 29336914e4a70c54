//! Key-value persistence capability
//!
//! A small get/set/remove interface over string keys and values. The client
//! uses it to remember each voter's last rating per feature; callers inject
//! whichever backend fits (in-memory for tests, a JSON file for the CLI).

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StorageError, StorageResult};
use crate::snapshot::write_atomic;

/// Key-value persistence.
///
/// Implementations must be safe to share between threads.
pub trait KeyValue: Send + Sync {
    /// Get the value stored under `key`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, overwriting any existing value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`, returning its previous value.
    fn remove(&self, key: &str) -> StorageResult<Option<String>>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-memory key-value store.
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryKv {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// True if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl KeyValue for MemoryKv {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.lock().remove(key))
    }
}

/// Key-value store backed by a JSON object file.
///
/// The file is read once on open; every write rewrites it atomically.
#[derive(Debug)]
pub struct FileKv {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileKv {
    /// Open (or lazily create) the store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(StorageError::serialization)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StorageError::io(&path, e)),
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        let bytes = serde_json::to_vec_pretty(entries).map_err(StorageError::serialization)?;
        write_atomic(&self.path, &bytes)
    }
}

impl KeyValue for FileKv {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock();
        let previous = entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist(&entries) {
            match previous {
                Some(v) => entries.insert(key.to_string(), v),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<Option<String>> {
        let mut entries = self.entries.lock();
        let previous = entries.remove(key);
        if previous.is_some() {
            if let Err(e) = self.persist(&entries) {
                if let Some(v) = previous {
                    entries.insert(key.to_string(), v);
                }
                return Err(e);
            }
        }
        Ok(previous)
    }
}
