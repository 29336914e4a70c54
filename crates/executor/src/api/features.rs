//! Feature operations: catalog and votes.

use featureboard_core::{Feature, FeatureId, FeatureInput, RatingSubmission};

use super::Board;
use crate::{Command, Error, Output, Result};

impl Board {
    // =========================================================================
    // Catalog (5)
    // =========================================================================

    /// List all features, newest first.
    pub fn list(&self) -> Result<Vec<Feature>> {
        match self.executor.execute(Command::FeatureList)? {
            Output::Features(features) => Ok(features),
            _ => Err(Error::Internal {
                reason: "Unexpected output for FeatureList".into(),
            }),
        }
    }

    /// Get one feature.
    pub fn get(&self, id: &FeatureId) -> Result<Feature> {
        self.feature_output(Command::FeatureGet { id: id.clone() }, "FeatureGet")
    }

    /// Create a feature.
    pub fn create(&self, input: FeatureInput) -> Result<Feature> {
        self.feature_output(Command::FeatureCreate { input }, "FeatureCreate")
    }

    /// Merge `input` over an existing feature.
    pub fn update(&self, id: &FeatureId, input: FeatureInput) -> Result<Feature> {
        self.feature_output(
            Command::FeatureUpdate {
                id: id.clone(),
                input,
            },
            "FeatureUpdate",
        )
    }

    /// Delete a feature.
    pub fn delete(&self, id: &FeatureId) -> Result<()> {
        match self
            .executor
            .execute(Command::FeatureDelete { id: id.clone() })?
        {
            Output::Deleted { .. } => Ok(()),
            _ => Err(Error::Internal {
                reason: "Unexpected output for FeatureDelete".into(),
            }),
        }
    }

    // =========================================================================
    // Votes (3)
    // =========================================================================

    /// Add one upvote.
    pub fn upvote(&self, id: &FeatureId) -> Result<Feature> {
        self.feature_output(Command::FeatureUpvote { id: id.clone() }, "FeatureUpvote")
    }

    /// Submit a rating; `previous` is the voter's earlier rating or 0.
    pub fn rate(&self, id: &FeatureId, rating: f64, previous: f64) -> Result<Feature> {
        self.feature_output(
            Command::FeatureRate {
                id: id.clone(),
                submission: RatingSubmission {
                    rating,
                    previous_rating: previous,
                },
            },
            "FeatureRate",
        )
    }

    /// Set the starred flag.
    pub fn star(&self, id: &FeatureId, starred: bool) -> Result<Feature> {
        self.feature_output(
            Command::FeatureStar {
                id: id.clone(),
                starred,
            },
            "FeatureStar",
        )
    }

    fn feature_output(&self, command: Command, name: &str) -> Result<Feature> {
        match self.executor.execute(command)? {
            Output::Feature(feature) => Ok(feature),
            _ => Err(Error::Internal {
                reason: format!("Unexpected output for {}", name),
            }),
        }
    }
}
