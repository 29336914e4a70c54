//! Feature store: the table plus optional snapshot persistence
//!
//! Every successful mutation is followed by a snapshot write when the store
//! is file-backed. If that write fails the mutation is undone in memory and
//! the error is returned. In-memory stores skip persistence entirely.

use featureboard_core::{Feature, FeatureError, FeatureId};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::error::StorageResult;
use crate::sharded::{FeatureTable, VersionedFeature};
use crate::snapshot::SnapshotFile;

/// Shared feature store.
///
/// `Send + Sync`; share it behind an `Arc`.
#[derive(Debug)]
pub struct FeatureStore {
    table: FeatureTable,
    snapshot: Option<SnapshotFile>,
}

impl FeatureStore {
    /// Create an empty, non-persistent store
    pub fn in_memory() -> Self {
        Self {
            table: FeatureTable::new(),
            snapshot: None,
        }
    }

    /// Open a file-backed store, loading the snapshot if present.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let snapshot = SnapshotFile::new(path);
        let table = FeatureTable::new();
        if let Some(data) = snapshot.load()? {
            for row in data.features {
                table.restore(row);
            }
            table.set_version(data.version);
            info!(path = %snapshot.path().display(), features = table.len(), "Opened feature store");
        }
        Ok(Self {
            table,
            snapshot: Some(snapshot),
        })
    }

    /// True if writes are persisted to disk
    pub fn is_persistent(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Current table version
    pub fn version(&self) -> u64 {
        self.table.version()
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True if there are no features
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Get a feature by id
    pub fn get(&self, id: &FeatureId) -> Option<VersionedFeature> {
        self.table.get(id)
    }

    /// All features, newest first
    pub fn list(&self) -> Vec<VersionedFeature> {
        self.table.list()
    }

    /// Insert a new feature.
    ///
    /// If the snapshot write fails the row is removed again.
    pub fn insert(&self, feature: Feature) -> StorageResult<VersionedFeature> {
        let row = self.table.insert(feature)?;
        self.persist_or_revert(&row.feature.id, Some(row.version), None)?;
        Ok(row)
    }

    /// Atomically read-modify-write one feature.
    ///
    /// If the snapshot write fails the previous row is put back.
    pub fn update<F>(&self, id: &FeatureId, mutate: F) -> StorageResult<VersionedFeature>
    where
        F: FnOnce(&mut Feature) -> Result<(), FeatureError>,
    {
        let (previous, row) = self.table.replace(id, mutate)?;
        self.persist_or_revert(id, Some(row.version), Some(previous))?;
        Ok(row)
    }

    /// Delete a feature; returns whether it existed
    pub fn delete(&self, id: &FeatureId) -> StorageResult<bool> {
        match self.table.delete(id) {
            Some(removed) => {
                self.persist_or_revert(id, None, Some(removed))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Insert `features` only if the store is empty. Returns how many were added.
    pub fn seed_if_empty(&self, features: Vec<Feature>) -> StorageResult<usize> {
        if !self.table.is_empty() {
            return Ok(0);
        }
        let mut added = 0;
        for feature in features {
            // A concurrent insert of the same id is fine; keep the other one.
            if self.table.insert(feature).is_ok() {
                added += 1;
            }
        }
        if added > 0 {
            self.persist()?;
            info!(added, "Seeded empty feature store");
        }
        Ok(added)
    }

    fn persist_or_revert(
        &self,
        id: &FeatureId,
        written: Option<u64>,
        previous: Option<VersionedFeature>,
    ) -> StorageResult<()> {
        if let Err(e) = self.persist() {
            let reverted = self.table.revert(id, written, previous);
            warn!(id = %id, reverted, "Rolled back write after snapshot failure");
            return Err(e);
        }
        Ok(())
    }

    /// Write the current table to the snapshot file, if any.
    pub fn persist(&self) -> StorageResult<()> {
        if let Some(snapshot) = &self.snapshot {
            if let Err(e) = snapshot.save(|| (self.table.version(), self.table.list())) {
                warn!(error = %e, "Snapshot write failed");
                return Err(e);
            }
        }
        Ok(())
    }
}
