//! Feature record types
//!
//! A [`Feature`] is the single shared record of the board. Counters are
//! unsigned so `upvotes >= 0` and `ratingCount >= 0` hold by construction;
//! the rating fields are kept consistent by [`crate::rating`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rating::derive_average;

/// Opaque, stable feature identifier.
///
/// New ids are UUID v4 strings; seeded and imported records may carry any
/// non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(String);

impl FeatureId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        FeatureId(uuid::Uuid::new_v4().to_string())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the id is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeatureId {
    fn from(s: &str) -> Self {
        FeatureId(s.to_string())
    }
}

impl From<String> for FeatureId {
    fn from(s: String) -> Self {
        FeatureId(s)
    }
}

impl AsRef<str> for FeatureId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An external link attached to a feature.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Link {
    /// Display title (may be empty)
    pub title: String,
    /// Target URL (may be empty)
    pub url: String,
}

/// A feature record as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// Stable identifier
    pub id: FeatureId,
    /// Headline
    pub title: String,
    /// Free-text release date, e.g. "August 7th"
    pub date: String,
    /// Emoji or short icon token
    pub icon: String,
    /// Release status, e.g. "Released"
    pub status: String,
    /// Long description
    pub description: String,
    /// One-line summary
    #[serde(default)]
    pub tldr: String,
    /// Grouping category
    #[serde(default)]
    pub category: String,
    /// Ordered tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ordered links
    #[serde(default)]
    pub links: Vec<Link>,
    /// Optional image blob or URL
    #[serde(default)]
    pub image: Option<String>,
    /// Upvote counter
    #[serde(default)]
    pub upvotes: u64,
    /// Comment counter (informational)
    #[serde(default)]
    pub comments: u64,
    /// Derived average rating in [0, 5]
    #[serde(default)]
    pub rating: f64,
    /// Number of rating submissions
    #[serde(default)]
    pub rating_count: u64,
    /// Sum of submitted ratings
    #[serde(default)]
    pub rating_total: f64,
    /// Starred flag
    #[serde(default)]
    pub is_starred: bool,
    /// Creation time
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    /// Last modification time
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl Feature {
    /// Create an empty feature with zeroed counters.
    pub fn new(id: FeatureId, title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            date: String::new(),
            icon: String::new(),
            status: String::new(),
            description: String::new(),
            tldr: String::new(),
            category: String::new(),
            tags: Vec::new(),
            links: Vec::new(),
            image: None,
            upvotes: 0,
            comments: 0,
            rating: 0.0,
            rating_count: 0,
            rating_total: 0.0,
            is_starred: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Recompute `rating` from `rating_total` and `rating_count`.
    pub fn refresh_rating(&mut self) {
        self.rating = derive_average(self.rating_total, self.rating_count);
    }

    /// Repair aggregates read from an older or hand-edited source.
    ///
    /// Negative or non-finite totals become 0 and the average is re-derived,
    /// which drops any legacy `rating` carried without a count.
    pub fn normalize_aggregates(&mut self) {
        if !self.rating_total.is_finite() || self.rating_total < 0.0 {
            self.rating_total = 0.0;
        }
        self.refresh_rating();
    }

    /// Check the record-level invariants of the rating fields.
    pub fn aggregates_consistent(&self) -> bool {
        if !(0.0..=crate::MAX_RATING).contains(&self.rating) || self.rating_total < 0.0 {
            return false;
        }
        if self.rating_count == 0 {
            return self.rating == 0.0;
        }
        let expected = derive_average(self.rating_total, self.rating_count);
        (self.rating - expected).abs() < 1e-9
    }
}
