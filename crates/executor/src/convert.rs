//! Error conversion from internal error types.
//!
//! This module provides conversions from core and storage errors to the
//! executor's [`Error`] type.

use crate::Error;
use featureboard_core::FeatureError;
use featureboard_storage::StorageError;

/// Convert a FeatureError to an executor Error.
impl From<FeatureError> for Error {
    fn from(err: FeatureError) -> Self {
        match err {
            FeatureError::InvalidRating { value } => Error::InvalidRating { value },
            FeatureError::NotFound { id } => Error::FeatureNotFound { id },
            FeatureError::FieldTooLong { .. } => Error::InvalidInput {
                reason: err.to_string(),
            },
            FeatureError::InvalidInput { message } => Error::InvalidInput { reason: message },
        }
    }
}

/// Convert a StorageError to an executor Error.
impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { id } => Error::FeatureNotFound { id },
            StorageError::AlreadyExists { id } => Error::FeatureExists { id },
            StorageError::Rejected(inner) => Error::from(inner),
            StorageError::Io { .. } => Error::Io {
                reason: err.to_string(),
            },
            StorageError::Serialization { message } => Error::Serialization { reason: message },
        }
    }
}

/// Convert a storage result to an executor Result.
pub fn convert_result<T>(result: featureboard_storage::StorageResult<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_rating_unwraps() {
        let err = StorageError::Rejected(FeatureError::InvalidRating { value: 6.0 });
        match Error::from(err) {
            Error::InvalidRating { value } => assert_eq!(value, 6.0),
            other => panic!("Expected InvalidRating, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found() {
        let converted: Error = StorageError::NotFound { id: "abc".into() }.into();
        match converted {
            Error::FeatureNotFound { id } => assert_eq!(id, "abc"),
            _ => panic!("Expected FeatureNotFound"),
        }
    }

    #[test]
    fn test_field_too_long_is_invalid_input() {
        let converted: Error = FeatureError::FieldTooLong {
            field: "title",
            len: 300,
            max: 255,
        }
        .into();
        match converted {
            Error::InvalidInput { reason } => assert!(reason.contains("title")),
            _ => panic!("Expected InvalidInput"),
        }
    }

    #[test]
    fn test_io_error() {
        let err = StorageError::Io {
            path: "/tmp/x".into(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        match Error::from(err) {
            Error::Io { reason } => assert!(reason.contains("disk full")),
            _ => panic!("Expected Io"),
        }
    }
}
