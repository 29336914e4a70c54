//! Outputs produced by the executor.

use featureboard_core::{Feature, FeatureId};
use serde::Serialize;

use crate::config::BoardConfig;

/// Result payload of a successful command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Output {
    /// Active configuration
    Config(BoardConfig),
    /// A single feature (get, create, update, votes)
    Feature(Feature),
    /// A list of features
    Features(Vec<Feature>),
    /// Feature was deleted
    Deleted {
        /// Id of the removed feature
        id: FeatureId,
    },
}
