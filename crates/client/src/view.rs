//! Client-side view of a feature.

use featureboard_core::Feature;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// A server record plus the state only this client knows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureView {
    /// The record as last confirmed (or optimistically predicted)
    #[serde(flatten)]
    pub feature: Feature,
    /// This voter's last submitted rating, 0 if none
    #[serde(default)]
    pub user_rating: f64,
}

impl FeatureView {
    /// Wrap a server record.
    pub fn new(feature: Feature, user_rating: f64) -> Self {
        Self {
            feature,
            user_rating,
        }
    }
}

impl Deref for FeatureView {
    type Target = Feature;

    fn deref(&self) -> &Feature {
        &self.feature
    }
}
