//! Commands accepted by the executor.

use featureboard_core::{FeatureId, FeatureInput, RatingSubmission};
use serde::{Deserialize, Serialize};

/// A single board operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Return the active configuration
    ConfigGet,

    // Catalog
    /// List all features, newest first
    FeatureList,
    /// Get one feature
    FeatureGet {
        /// Feature id
        id: FeatureId,
    },
    /// Create a feature from a draft
    FeatureCreate {
        /// Draft body
        input: FeatureInput,
    },
    /// Merge a patch over a feature
    FeatureUpdate {
        /// Feature id
        id: FeatureId,
        /// Patch body
        input: FeatureInput,
    },
    /// Delete a feature
    FeatureDelete {
        /// Feature id
        id: FeatureId,
    },

    // Votes
    /// Add one upvote
    FeatureUpvote {
        /// Feature id
        id: FeatureId,
    },
    /// Submit or revise a rating
    FeatureRate {
        /// Feature id
        id: FeatureId,
        /// New and previous rating
        submission: RatingSubmission,
    },
    /// Set the starred flag
    FeatureStar {
        /// Feature id
        id: FeatureId,
        /// Desired state
        starred: bool,
    },
}

impl Command {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::ConfigGet => "ConfigGet",
            Command::FeatureList => "FeatureList",
            Command::FeatureGet { .. } => "FeatureGet",
            Command::FeatureCreate { .. } => "FeatureCreate",
            Command::FeatureUpdate { .. } => "FeatureUpdate",
            Command::FeatureDelete { .. } => "FeatureDelete",
            Command::FeatureUpvote { .. } => "FeatureUpvote",
            Command::FeatureRate { .. } => "FeatureRate",
            Command::FeatureStar { .. } => "FeatureStar",
        }
    }

    /// True if the command mutates the store.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::FeatureCreate { .. }
                | Command::FeatureUpdate { .. }
                | Command::FeatureDelete { .. }
                | Command::FeatureUpvote { .. }
                | Command::FeatureRate { .. }
                | Command::FeatureStar { .. }
        )
    }
}
