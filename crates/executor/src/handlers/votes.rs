//! Vote command handlers.
//!
//! Upvote, rate and star. Each runs as one atomic read-modify-write on the
//! feature row, so concurrent votes on the same feature are all counted.

use std::sync::Arc;

use chrono::Utc;
use featureboard_core::{rating, FeatureId, RatingSubmission};
use tracing::debug;

use crate::bridge::{validate_id, Primitives};
use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle FeatureUpvote command.
pub fn feature_upvote(p: &Arc<Primitives>, id: FeatureId) -> Result<Output> {
    p.require_writable()?;
    validate_id(&id)?;
    let row = convert_result(p.store.update(&id, |feature| {
        rating::upvote(feature);
        feature.updated_at = Utc::now();
        Ok(())
    }))?;
    debug!(id = %id, upvotes = row.feature.upvotes, "Upvoted");
    Ok(Output::Feature(row.feature))
}

/// Handle FeatureRate command.
///
/// The rating is validated before the store is touched, so an invalid value
/// on an unknown id reports `InvalidRating`.
pub fn feature_rate(p: &Arc<Primitives>, id: FeatureId, submission: RatingSubmission) -> Result<Output> {
    p.require_writable()?;
    validate_id(&id)?;
    rating::validate_rating(submission.rating)?;
    let row = convert_result(p.store.update(&id, |feature| {
        rating::submit_rating(feature, submission.rating, submission.previous_rating)?;
        feature.updated_at = Utc::now();
        Ok(())
    }))?;
    debug!(
        id = %id,
        rating = row.feature.rating,
        count = row.feature.rating_count,
        "Rated"
    );
    Ok(Output::Feature(row.feature))
}

/// Handle FeatureStar command.
pub fn feature_star(p: &Arc<Primitives>, id: FeatureId, starred: bool) -> Result<Output> {
    p.require_writable()?;
    validate_id(&id)?;
    let row = convert_result(p.store.update(&id, |feature| {
        feature.is_starred = starred;
        feature.updated_at = Utc::now();
        Ok(())
    }))?;
    Ok(Output::Feature(row.feature))
}
