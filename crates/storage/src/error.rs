//! Storage error type.

use std::path::PathBuf;

use featureboard_core::FeatureError;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Errors raised by the feature table, snapshots and key-value stores.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No record with this id.
    #[error("feature not found: {id}")]
    NotFound {
        /// The missing id
        id: String,
    },

    /// Insert collided with an existing id.
    #[error("feature already exists: {id}")]
    AlreadyExists {
        /// The duplicate id
        id: String,
    },

    /// An update closure rejected the change; the record is untouched.
    #[error(transparent)]
    Rejected(#[from] FeatureError),

    /// Filesystem failure.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Snapshot or key-value file could not be encoded or decoded.
    #[error("serialization error: {message}")]
    Serialization {
        /// Description
        message: String,
    },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn serialization(err: impl std::fmt::Display) -> Self {
        StorageError::Serialization {
            message: err.to_string(),
        }
    }
}
