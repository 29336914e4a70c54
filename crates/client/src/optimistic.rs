//! Optimistic mutations and reconciliation
//!
//! A vote is applied to the local record before the server has seen it. The
//! record as it was beforehand is kept in a [`PendingMutation`]; once the
//! server answers, [`reconcile`] decides what the local record becomes.
//! Reconciliation is pure so it can be tested without a transport.

use featureboard_core::{submit_rating, upvote, Feature, FeatureId, FeatureResult};

use crate::view::FeatureView;

/// A locally predictable change to one feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mutation {
    /// Add one upvote
    Upvote,
    /// Submit or revise a rating
    Rate {
        /// New rating, 1 to 5
        rating: f64,
        /// This voter's previous rating, 0 if none
        previous: f64,
    },
    /// Set the starred flag
    Star {
        /// Desired state
        starred: bool,
    },
}

impl Mutation {
    /// Predict the server's result on a local copy.
    ///
    /// Uses the same aggregation as the server, so an uncontended
    /// confirmation matches the prediction exactly. On error the view is
    /// unchanged.
    pub fn apply(&self, view: &mut FeatureView) -> FeatureResult<()> {
        match *self {
            Mutation::Upvote => upvote(&mut view.feature),
            Mutation::Rate { rating, previous } => {
                submit_rating(&mut view.feature, rating, previous)?;
                view.user_rating = rating;
            }
            Mutation::Star { starred } => view.feature.is_starred = starred,
        }
        Ok(())
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Upvote => "upvote",
            Mutation::Rate { .. } => "rate",
            Mutation::Star { .. } => "star",
        }
    }
}

/// How the server answered a mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The server applied it and returned the authoritative record
    Confirmed(Feature),
    /// Transport failure or non-success status
    Failed,
}

/// A mutation that has been applied locally but not yet settled.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMutation {
    /// Target feature
    pub id: FeatureId,
    /// What was applied
    pub mutation: Mutation,
    /// The record before the mutation
    pub snapshot: FeatureView,
    /// The record after the local prediction
    pub optimistic: FeatureView,
}

impl PendingMutation {
    /// Snapshot `current` and apply `mutation` to a copy of it.
    pub fn begin(current: &FeatureView, mutation: Mutation) -> FeatureResult<Self> {
        let mut optimistic = current.clone();
        mutation.apply(&mut optimistic)?;
        Ok(Self {
            id: current.feature.id.clone(),
            mutation,
            snapshot: current.clone(),
            optimistic,
        })
    }

    /// Resolve against the server's answer.
    pub fn settle(&self, outcome: &Outcome) -> FeatureView {
        reconcile(&self.snapshot, &self.optimistic, outcome)
    }
}

/// Decide the local record after the server answered.
///
/// On confirmation the server record wins, keeping the client-only
/// `user_rating` from the optimistic copy. On failure the snapshot is
/// restored exactly.
pub fn reconcile(snapshot: &FeatureView, optimistic: &FeatureView, outcome: &Outcome) -> FeatureView {
    match outcome {
        Outcome::Confirmed(server) => FeatureView::new(server.clone(), optimistic.user_rating),
        Outcome::Failed => snapshot.clone(),
    }
}
