//! Client-side state container for featureboard
//!
//! [`FeatureBoard`] caches the feature list, applies upvotes, ratings and
//! stars optimistically, and reconciles each one against the server's answer:
//! the server record replaces the local one on success, the pre-mutation
//! snapshot is restored on failure.
//!
//! # Modules
//!
//! - `transport`: how requests reach the server ([`Transport`], [`LocalTransport`])
//! - `api`: typed calls over a transport
//! - `optimistic`: mutations and the pure [`reconcile`] function
//! - `voter`: the voter's remembered ratings, over a [`KeyValue`] store
//! - `filter`: date parsing, month grouping, search and tag/category filters
//! - `board`: [`FeatureBoard`], the container tying it together
//!
//! [`KeyValue`]: featureboard_storage::KeyValue

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod board;
pub mod error;
pub mod filter;
pub mod optimistic;
pub mod transport;
pub mod view;
pub mod voter;

pub use api::FeatureApi;
pub use board::{FeatureBoard, LoadSource};
pub use error::{ClientError, ClientResult};
pub use filter::{FilterState, MonthFilter};
pub use optimistic::{reconcile, Mutation, Outcome, PendingMutation};
pub use transport::{LocalTransport, Transport, TransportError};
pub use view::FeatureView;
pub use voter::VoterRatings;
