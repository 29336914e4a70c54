//! Executor error type.
//!
//! Every failure surfaced by a command maps to one of these variants. The
//! HTTP layer turns them into status codes (see [`Error::status_code`]).

use thiserror::Error;

/// Errors returned by [`crate::Executor::execute`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Rating outside [1, 5] or not a number.
    #[error("invalid rating {value}: must be between 1 and 5")]
    InvalidRating {
        /// Rejected value
        value: f64,
    },

    /// No feature with this id.
    #[error("feature not found: {id}")]
    FeatureNotFound {
        /// Requested id
        id: String,
    },

    /// Create collided with an existing id.
    #[error("feature already exists: {id}")]
    FeatureExists {
        /// Duplicate id
        id: String,
    },

    /// Malformed or out-of-limit input.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong
        reason: String,
    },

    /// Write attempted on a read-only board.
    #[error("access denied: {reason}")]
    AccessDenied {
        /// Why the write was refused
        reason: String,
    },

    /// Filesystem failure.
    #[error("I/O error: {reason}")]
    Io {
        /// Underlying error text
        reason: String,
    },

    /// Encoding or decoding failure.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Underlying error text
        reason: String,
    },

    /// Unexpected internal state.
    #[error("internal error: {reason}")]
    Internal {
        /// Description
        reason: String,
    },
}

impl Error {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidRating { .. } | Error::InvalidInput { .. } => 400,
            Error::AccessDenied { .. } => 403,
            Error::FeatureNotFound { .. } => 404,
            Error::FeatureExists { .. } => 409,
            Error::Io { .. } | Error::Serialization { .. } | Error::Internal { .. } => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::InvalidRating { value: 6.0 }.status_code(), 400);
        assert_eq!(Error::FeatureNotFound { id: "x".into() }.status_code(), 404);
        assert_eq!(Error::AccessDenied { reason: "ro".into() }.status_code(), 403);
        assert_eq!(Error::Io { reason: "disk".into() }.status_code(), 500);
    }
}
