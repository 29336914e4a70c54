//! Public types for the featureboard API.
//!
//! Re-exports from the internal crates under one flat namespace.

// Records and request bodies
pub use featureboard_core::{Feature, FeatureId, FeatureInput, Link, RatingSubmission, StarRequest};

// Aggregation
pub use featureboard_core::{submit_rating, upvote, MAX_RATING, MIN_RATING};

// Errors
pub use featureboard_client::ClientError;
pub use featureboard_core::FeatureError;
pub use featureboard_executor::Error;

// Board, configuration and storage
pub use featureboard_executor::{AccessMode, Board, BoardConfig, OpenOptions};
pub use featureboard_storage::{FileKv, KeyValue, MemoryKv};

// Client
pub use featureboard_client::{
    reconcile, FeatureBoard, FeatureView, FilterState, LoadSource, LocalTransport, MonthFilter,
    Mutation, Outcome, Transport, TransportError, VoterRatings,
};
