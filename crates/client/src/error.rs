//! Client error type.

use featureboard_core::FeatureError;
use featureboard_storage::StorageError;
use thiserror::Error;

use crate::transport::TransportError;

/// Result alias for client operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by [`crate::FeatureBoard`].
///
/// Whatever the variant, a failed optimistic mutation has already been
/// rolled back by the time the caller sees it.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Rating outside [1, 5]; nothing was sent.
    #[error("invalid rating {value}: must be between 1 and 5")]
    InvalidRating {
        /// The rejected value
        value: f64,
    },

    /// The feature is unknown locally or on the server.
    #[error("feature not found: {id}")]
    NotFound {
        /// The missing id
        id: String,
    },

    /// The request never got a response.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-success status.
    #[error("server rejected request ({status}): {message}")]
    Rejected {
        /// HTTP status
        status: u16,
        /// Server error message
        message: String,
    },

    /// A response body did not decode.
    #[error("malformed response: {reason}")]
    MalformedResponse {
        /// Decoder message
        reason: String,
    },

    /// Local input failed validation.
    #[error(transparent)]
    Invalid(FeatureError),

    /// Voter memory could not be read or written.
    #[error("voter storage: {0}")]
    Storage(#[from] StorageError),
}

impl From<FeatureError> for ClientError {
    fn from(err: FeatureError) -> Self {
        match err {
            FeatureError::InvalidRating { value } => ClientError::InvalidRating { value },
            FeatureError::NotFound { id } => ClientError::NotFound { id },
            other => ClientError::Invalid(other),
        }
    }
}

impl ClientError {
    /// True if the request never reached a server.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}
