//! Rating aggregation and upvote counting
//!
//! A feature's rating is a running average kept as `(rating_total,
//! rating_count)` with `rating` derived from them. Voters may submit a first
//! rating or revise the one they gave before; the voter's previous value is
//! supplied by the caller (the client remembers it locally).
//!
//! # Update rules
//!
//! | previous | rating_total'                      | rating_count'      |
//! |----------|------------------------------------|--------------------|
//! | 0        | total + new                        | count + 1          |
//! | 1..=5    | max(0, total - previous + new)     | count (0 becomes 1)|
//!
//! `rating' = total' / count'` clamped to [0, 5], or 0 when the count is 0.
//!
//! Revisions rely on the caller supplying the right previous value. A voter
//! that lost its local memory and submits again with previous = 0 is counted
//! twice.

use crate::error::{FeatureError, FeatureResult};
use crate::types::Feature;
use crate::{MAX_RATING, MIN_RATING};

/// Validate a submitted rating.
///
/// Returns the value unchanged if it is finite and within [1, 5].
pub fn validate_rating(value: f64) -> FeatureResult<f64> {
    if value.is_finite() && (MIN_RATING..=MAX_RATING).contains(&value) {
        Ok(value)
    } else {
        Err(FeatureError::InvalidRating { value })
    }
}

/// Normalize a voter's previous rating.
///
/// Anything outside [1, 5] (including NaN) means "has not rated before" and
/// maps to 0.
pub fn normalize_previous(value: f64) -> f64 {
    if value.is_finite() && (MIN_RATING..=MAX_RATING).contains(&value) {
        value
    } else {
        0.0
    }
}

/// Derive the bounded average from a total and a count.
#[inline]
pub fn derive_average(total: f64, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let avg = total / count as f64;
    if avg.is_finite() {
        avg.clamp(0.0, MAX_RATING)
    } else {
        0.0
    }
}

/// Merge one rating submission into a feature's aggregates.
///
/// Validates `new_value` before touching the record, so on error the
/// feature is unchanged. On success `rating_total`, `rating_count` and
/// `rating` are all updated.
pub fn submit_rating(feature: &mut Feature, new_value: f64, previous_value: f64) -> FeatureResult<()> {
    let new_value = validate_rating(new_value)?;
    let previous = normalize_previous(previous_value);

    let (total, count) = if previous == 0.0 {
        (
            feature.rating_total + new_value,
            feature.rating_count.saturating_add(1),
        )
    } else {
        // A revision with no recorded submissions means the stored aggregate
        // was already inconsistent; count this vote as the only one.
        (
            (feature.rating_total - previous + new_value).max(0.0),
            feature.rating_count.max(1),
        )
    };

    feature.rating_total = total;
    feature.rating_count = count;
    feature.rating = derive_average(total, count);
    Ok(())
}

/// Record one upvote.
///
/// Every call is a distinct vote; there is no per-voter deduplication.
#[inline]
pub fn upvote(feature: &mut Feature) {
    feature.upvotes = feature.upvotes.saturating_add(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FeatureId;
    use chrono::Utc;
    use proptest::prelude::*;

    fn feature_with(total: f64, count: u64) -> Feature {
        let mut f = Feature::new(FeatureId::from("f"), "Feature", Utc::now());
        f.rating_total = total;
        f.rating_count = count;
        f.refresh_rating();
        f
    }

    #[test]
    fn test_first_vote_on_empty_record() {
        let mut f = feature_with(0.0, 0);
        submit_rating(&mut f, 4.0, 0.0).unwrap();
        assert_eq!(f.rating_total, 4.0);
        assert_eq!(f.rating_count, 1);
        assert_eq!(f.rating, 4.0);
    }

    #[test]
    fn test_revision_keeps_count() {
        let mut f = feature_with(4.0, 1);
        submit_rating(&mut f, 2.0, 4.0).unwrap();
        assert_eq!(f.rating_total, 2.0);
        assert_eq!(f.rating_count, 1);
        assert_eq!(f.rating, 2.0);
    }

    #[test]
    fn test_new_voter_joins_average() {
        let mut f = feature_with(9.0, 2);
        assert_eq!(f.rating, 4.5);
        submit_rating(&mut f, 3.0, 0.0).unwrap();
        assert_eq!(f.rating_total, 12.0);
        assert_eq!(f.rating_count, 3);
        assert_eq!(f.rating, 4.0);
    }

    #[test]
    fn test_out_of_range_rejected_without_change() {
        let mut f = feature_with(9.0, 2);
        let before = f.clone();
        for bad in [6.0, 0.0, 0.5, -1.0, f64::NAN, f64::INFINITY] {
            let err = submit_rating(&mut f, bad, 0.0).unwrap_err();
            assert!(matches!(err, FeatureError::InvalidRating { .. }));
            assert_eq!(f, before);
        }
    }

    #[test]
    fn test_bogus_previous_is_treated_as_new_vote() {
        let mut f = feature_with(4.0, 1);
        submit_rating(&mut f, 2.0, 7.0).unwrap();
        assert_eq!(f.rating_count, 2);
        assert_eq!(f.rating_total, 6.0);

        let mut g = feature_with(4.0, 1);
        submit_rating(&mut g, 2.0, f64::NAN).unwrap();
        assert_eq!(g.rating_count, 2);
    }

    #[test]
    fn test_revision_on_zero_count_forces_one() {
        let mut f = feature_with(0.0, 0);
        submit_rating(&mut f, 3.0, 5.0).unwrap();
        assert_eq!(f.rating_count, 1);
        // 0 - 5 + 3 floors at 0
        assert_eq!(f.rating_total, 0.0);
        assert_eq!(f.rating, 0.0);
    }

    #[test]
    fn test_fractional_ratings_accepted() {
        let mut f = feature_with(0.0, 0);
        submit_rating(&mut f, 3.5, 0.0).unwrap();
        assert_eq!(f.rating, 3.5);
    }

    #[test]
    fn test_lost_voter_memory_double_counts() {
        let mut f = feature_with(0.0, 0);
        submit_rating(&mut f, 5.0, 0.0).unwrap();
        submit_rating(&mut f, 5.0, 0.0).unwrap();
        assert_eq!(f.rating_count, 2);
        assert_eq!(f.rating_total, 10.0);
    }

    #[test]
    fn test_upvote_twice() {
        let mut f = feature_with(0.0, 0);
        f.upvotes = 5;
        upvote(&mut f);
        upvote(&mut f);
        assert_eq!(f.upvotes, 7);
    }

    #[test]
    fn test_upvote_saturates() {
        let mut f = feature_with(0.0, 0);
        f.upvotes = u64::MAX;
        upvote(&mut f);
        assert_eq!(f.upvotes, u64::MAX);
    }

    #[test]
    fn test_derive_average_zero_count() {
        assert_eq!(derive_average(12.0, 0), 0.0);
        assert_eq!(derive_average(100.0, 2), 5.0);
    }

    fn valid_rating() -> impl Strategy<Value = f64> {
        prop_oneof![(1u8..=5).prop_map(f64::from), 1.0f64..=5.0]
    }

    proptest! {
        #[test]
        fn prop_new_voter_adds_exactly_one(
            total in 0.0f64..500.0,
            count in 0u64..100,
            new in valid_rating(),
        ) {
            let mut f = feature_with(total, count);
            submit_rating(&mut f, new, 0.0).unwrap();
            prop_assert_eq!(f.rating_count, count + 1);
            prop_assert!((f.rating_total - (total + new)).abs() < 1e-9);
        }

        #[test]
        fn prop_revision_keeps_count(
            total in 0.0f64..500.0,
            count in 0u64..100,
            new in valid_rating(),
            prev in valid_rating(),
        ) {
            let mut f = feature_with(total, count);
            submit_rating(&mut f, new, prev).unwrap();
            prop_assert_eq!(f.rating_count, count.max(1));
            let expected = (total - prev + new).max(0.0);
            prop_assert!((f.rating_total - expected).abs() < 1e-9);
        }

        #[test]
        fn prop_rating_stays_bounded(
            votes in proptest::collection::vec((valid_rating(), prop_oneof![Just(0.0), valid_rating()]), 1..50),
        ) {
            let mut f = feature_with(0.0, 0);
            for (new, prev) in votes {
                submit_rating(&mut f, new, prev).unwrap();
                prop_assert!((0.0..=5.0).contains(&f.rating));
                prop_assert!(f.rating_total >= 0.0);
                prop_assert!(f.aggregates_consistent());
            }
        }
    }
}
