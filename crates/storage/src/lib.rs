//! Storage layer for featureboard
//!
//! - `sharded`: concurrent in-memory feature table with per-record atomic updates
//! - `snapshot`: JSON snapshot file for durability across restarts
//! - `kv`: key-value persistence capability (voter-local state)
//! - `store`: [`FeatureStore`], the table plus optional snapshot persistence

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod kv;
pub mod sharded;
pub mod snapshot;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use kv::{FileKv, KeyValue, MemoryKv};
pub use sharded::{FeatureTable, VersionedFeature};
pub use snapshot::{SnapshotData, SnapshotFile};
pub use store::FeatureStore;
