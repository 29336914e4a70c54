//! JSON snapshot durability
//!
//! The whole table is written to one JSON file after each mutation. Writes go
//! to a sibling temp file that is then renamed over the target, so a crash
//! leaves either the old or the new snapshot, never a torn one.

use featureboard_core::Feature;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::sharded::VersionedFeature;

/// Current on-disk format version.
pub const SNAPSHOT_FORMAT: u32 = 1;

/// Contents of a snapshot file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotData {
    /// On-disk format version
    pub format: u32,
    /// Table version at the time of the snapshot
    pub version: u64,
    /// All rows
    pub features: Vec<VersionedFeature>,
}

/// A snapshot file location with serialized writers.
#[derive(Debug)]
pub struct SnapshotFile {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl SnapshotFile {
    /// Bind to a path. Nothing is read or created yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot, or `None` if the file does not exist.
    ///
    /// Aggregates of every loaded feature are normalized.
    pub fn load(&self) -> StorageResult<Option<SnapshotData>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };
        let mut data: SnapshotData =
            serde_json::from_slice(&bytes).map_err(StorageError::serialization)?;
        if data.format > SNAPSHOT_FORMAT {
            return Err(StorageError::Serialization {
                message: format!(
                    "snapshot format {} is newer than supported format {}",
                    data.format, SNAPSHOT_FORMAT
                ),
            });
        }
        for row in &mut data.features {
            normalize(&mut row.feature);
        }
        debug!(path = %self.path.display(), features = data.features.len(), "Loaded snapshot");
        Ok(Some(data))
    }

    /// Atomically replace the snapshot with the rows `collect` returns.
    ///
    /// `collect` runs under the write lock; the last writer always holds the
    /// newest rows.
    pub fn save<F>(&self, collect: F) -> StorageResult<()>
    where
        F: FnOnce() -> (u64, Vec<VersionedFeature>),
    {
        let _guard = self.write_lock.lock();
        let (version, features) = collect();
        let data = SnapshotData {
            format: SNAPSHOT_FORMAT,
            version,
            features,
        };
        let bytes = serde_json::to_vec_pretty(&data).map_err(StorageError::serialization)?;
        write_atomic(&self.path, &bytes)?;
        debug!(path = %self.path.display(), version, "Saved snapshot");
        Ok(())
    }
}

fn normalize(feature: &mut Feature) {
    feature.normalize_aggregates();
}

/// Write `bytes` to `path` through a temp file and rename.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }
    }
    let tmp = path.with_extension("tmp");
    {
        let mut file = fs::File::create(&tmp).map_err(|e| StorageError::io(&tmp, e))?;
        file.write_all(bytes).map_err(|e| StorageError::io(&tmp, e))?;
        file.sync_all().map_err(|e| StorageError::io(&tmp, e))?;
    }
    fs::rename(&tmp, path).map_err(|e| StorageError::io(path, e))
}
