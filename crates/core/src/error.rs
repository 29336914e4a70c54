//! Error types for feature validation and aggregation.

use thiserror::Error;

/// Result alias for core operations.
pub type FeatureResult<T> = std::result::Result<T, FeatureError>;

/// Errors raised by pure feature logic.
///
/// None of these leave partial state behind: every operation validates its
/// input before touching the record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// Rating value is not finite or lies outside [1, 5].
    #[error("invalid rating {value}: must be a number between 1 and 5")]
    InvalidRating {
        /// The rejected value
        value: f64,
    },

    /// No feature with this id exists.
    #[error("feature not found: {id}")]
    NotFound {
        /// The id that was looked up
        id: String,
    },

    /// A text field exceeds its length limit.
    #[error("field '{field}' is too long: {len} characters (max {max})")]
    FieldTooLong {
        /// Field name as it appears on the wire
        field: &'static str,
        /// Actual length in characters
        len: usize,
        /// Configured maximum
        max: usize,
    },

    /// Any other malformed input (negative or non-finite aggregate, bad body).
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of the problem
        message: String,
    },
}

impl FeatureError {
    /// Create a NotFound error.
    pub fn not_found(id: impl Into<String>) -> Self {
        FeatureError::NotFound { id: id.into() }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        FeatureError::InvalidInput {
            message: message.into(),
        }
    }

    /// True for errors caused by the caller's input rather than missing data.
    pub fn is_validation(&self) -> bool {
        !matches!(self, FeatureError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rating_message() {
        let err = FeatureError::InvalidRating { value: 6.0 };
        assert!(err.to_string().contains("between 1 and 5"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_is_not_validation() {
        let err = FeatureError::not_found("abc");
        assert_eq!(err.to_string(), "feature not found: abc");
        assert!(!err.is_validation());
    }
}
