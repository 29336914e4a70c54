//! Sharded feature table
//!
//! DashMap keyed by [`FeatureId`]. Reads only take a shard read lock; an
//! update holds the shard write lock for the whole read-modify-write, so two
//! concurrent votes on the same feature never lose an update.
//!
//! # Design
//!
//! - DashMap: sharded by id, lock-free for readers of other shards
//! - Global version: monotonically increasing, stamped on every write
//! - Updates run on a copy and commit only on success (all-or-nothing)

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use featureboard_core::{Feature, FeatureError, FeatureId};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{StorageError, StorageResult};

/// A feature together with the store version of its last write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedFeature {
    /// The record
    pub feature: Feature,
    /// Store version assigned by the write that produced this record
    pub version: u64,
}

/// Concurrent in-memory feature table.
pub struct FeatureTable {
    rows: DashMap<FeatureId, VersionedFeature>,
    version: AtomicU64,
}

impl FeatureTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            version: AtomicU64::new(0),
        }
    }

    /// Create with expected number of features
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: DashMap::with_capacity(capacity),
            version: AtomicU64::new(0),
        }
    }

    /// Get current version
    #[inline]
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Increment version and return new value
    #[inline]
    pub fn next_version(&self) -> u64 {
        self.version.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Set version (used when loading a snapshot)
    pub fn set_version(&self, version: u64) {
        self.version.store(version, Ordering::Release);
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table holds no features
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check if a feature exists
    #[inline]
    pub fn contains(&self, id: &FeatureId) -> bool {
        self.rows.contains_key(id)
    }

    /// Get a feature by id
    #[inline]
    pub fn get(&self, id: &FeatureId) -> Option<VersionedFeature> {
        self.rows.get(id).map(|row| row.value().clone())
    }

    /// Insert a new feature.
    ///
    /// Fails with `AlreadyExists` if the id is taken.
    pub fn insert(&self, feature: Feature) -> StorageResult<VersionedFeature> {
        match self.rows.entry(feature.id.clone()) {
            Entry::Occupied(_) => Err(StorageError::AlreadyExists {
                id: feature.id.to_string(),
            }),
            Entry::Vacant(slot) => {
                let row = VersionedFeature {
                    feature,
                    version: self.next_version(),
                };
                slot.insert(row.clone());
                Ok(row)
            }
        }
    }

    /// Put a row as-is, overwriting any existing one. Used when restoring.
    pub fn restore(&self, row: VersionedFeature) {
        self.rows.insert(row.feature.id.clone(), row);
    }

    /// Atomically read-modify-write one feature.
    ///
    /// `mutate` runs on a copy while the row's shard is write-locked. If it
    /// returns an error nothing is written.
    pub fn update<F>(&self, id: &FeatureId, mutate: F) -> StorageResult<VersionedFeature>
    where
        F: FnOnce(&mut Feature) -> Result<(), FeatureError>,
    {
        self.replace(id, mutate).map(|(_, row)| row)
    }

    /// Like [`update`](Self::update), but also returns the row it replaced.
    pub fn replace<F>(
        &self,
        id: &FeatureId,
        mutate: F,
    ) -> StorageResult<(VersionedFeature, VersionedFeature)>
    where
        F: FnOnce(&mut Feature) -> Result<(), FeatureError>,
    {
        let mut row = self.rows.get_mut(id).ok_or_else(|| StorageError::NotFound {
            id: id.to_string(),
        })?;
        let previous = row.clone();
        let mut draft = row.feature.clone();
        mutate(&mut draft)?;
        row.feature = draft;
        row.version = self.next_version();
        Ok((previous, row.clone()))
    }

    /// Undo one write.
    ///
    /// `written` is the version the write stamped, or `None` if the write was
    /// a delete. The undo only applies while the row is still exactly what
    /// that write left behind; a later write to the same id wins.
    pub fn revert(
        &self,
        id: &FeatureId,
        written: Option<u64>,
        previous: Option<VersionedFeature>,
    ) -> bool {
        match (self.rows.entry(id.clone()), written) {
            (Entry::Occupied(mut slot), Some(version)) if slot.get().version == version => {
                match previous {
                    Some(row) => {
                        slot.insert(row);
                    }
                    None => {
                        slot.remove();
                    }
                }
                true
            }
            (Entry::Vacant(slot), None) => match previous {
                Some(row) => {
                    slot.insert(row);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Delete a feature, returning it if it existed
    pub fn delete(&self, id: &FeatureId) -> Option<VersionedFeature> {
        self.rows.remove(id).map(|(_, row)| row)
    }

    /// All features, newest first (by `created_at`, ties broken by id).
    pub fn list(&self) -> Vec<VersionedFeature> {
        let mut rows: Vec<VersionedFeature> =
            self.rows.iter().map(|row| row.value().clone()).collect();
        rows.sort_by(|a, b| {
            b.feature
                .created_at
                .cmp(&a.feature.created_at)
                .then_with(|| a.feature.id.cmp(&b.feature.id))
        });
        rows
    }
}

impl Default for FeatureTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FeatureTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureTable")
            .field("len", &self.len())
            .field("version", &self.version())
            .finish()
    }
}
