//! Core types for featureboard
//!
//! This crate holds everything that is pure and shared between the server
//! side (storage, executor) and the client side (optimistic state container):
//! - `types`: Feature records, identifiers, links
//! - `input`: Create/edit bodies and their normalization
//! - `limits`: Text field length limits
//! - `rating`: Rating aggregation and upvote math
//! - `seed`: Built-in catalog used to bootstrap empty boards
//! - `error`: Error type for validation failures

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod input;
pub mod limits;
pub mod rating;
pub mod seed;
pub mod types;

pub use error::{FeatureError, FeatureResult};
pub use input::{FeatureInput, LinkInput, RatingSubmission, StarRequest};
pub use limits::Limits;
pub use rating::{derive_average, normalize_previous, submit_rating, upvote, validate_rating};
pub use types::{Feature, FeatureId, Link};

/// Lowest accepted rating value.
pub const MIN_RATING: f64 = 1.0;

/// Highest accepted rating value; also the upper bound of the derived average.
pub const MAX_RATING: f64 = 5.0;
