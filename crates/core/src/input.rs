//! Request bodies and their normalization
//!
//! Create and edit share one body shape, [`FeatureInput`]: every field is
//! optional. On create, missing text fields become empty strings; on edit,
//! missing fields keep their current value. Tags are coerced to strings and
//! links with neither a title nor a url are dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{FeatureError, FeatureResult};
use crate::limits::Limits;
use crate::types::{Feature, FeatureId, Link};

/// A link as it arrives in a request body; both parts are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkInput {
    /// Display title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Target URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<Link> for LinkInput {
    fn from(link: Link) -> Self {
        Self {
            title: Some(link.title),
            url: Some(link.url),
        }
    }
}

/// Body of a create or edit request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureInput {
    /// Headline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-text release date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Icon or emoji
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Release status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Long description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// One-line summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tldr: Option<String>,
    /// Grouping category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Any JSON scalars; normalized to strings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<JsonValue>>,
    /// Null entries and empty links are dropped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Option<LinkInput>>>,
    /// Image blob or URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Only honored on edit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upvotes: Option<u64>,
    /// Only honored on edit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
    /// Only honored on edit; `rating` is always re-derived
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_total: Option<f64>,
    /// Only honored on edit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<u64>,
    /// Starred flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_starred: Option<bool>,
}

impl FeatureInput {
    /// Start an input with only a title set.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Set the tags from plain strings.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(|t| JsonValue::String(t.into())).collect());
        self
    }

    /// Set the links.
    pub fn with_links(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        self.links = Some(links.into_iter().map(|l| Some(LinkInput::from(l))).collect());
        self
    }

    /// Check field lengths and aggregate values without applying anything.
    pub fn validate(&self, limits: &Limits) -> FeatureResult<()> {
        let bounded = [
            ("title", &self.title, limits.title),
            ("date", &self.date, limits.date),
            ("icon", &self.icon, limits.icon),
            ("status", &self.status, limits.status),
            ("tldr", &self.tldr, limits.tldr),
            ("category", &self.category, limits.category),
        ];
        for (field, value, max) in bounded {
            if let Some(v) = value {
                Limits::check(field, v, max)?;
            }
        }
        if let Some(total) = self.rating_total {
            if !total.is_finite() || total < 0.0 {
                return Err(FeatureError::invalid_input(format!(
                    "ratingTotal must be a non-negative number, got {}",
                    total
                )));
            }
        }
        Ok(())
    }

    /// Build a new feature from this input.
    ///
    /// Counters and rating aggregates start at zero regardless of the body.
    pub fn into_feature(self, id: FeatureId, now: DateTime<Utc>, limits: &Limits) -> FeatureResult<Feature> {
        self.validate(limits)?;
        let mut feature = Feature::new(id, String::new(), now);
        feature.is_starred = self.is_starred.unwrap_or(false);
        self.apply_fields(&mut feature);
        Ok(feature)
    }

    /// Merge this input over an existing feature.
    ///
    /// Fails before modifying anything if validation fails.
    pub fn apply_to(self, feature: &mut Feature, now: DateTime<Utc>, limits: &Limits) -> FeatureResult<()> {
        self.validate(limits)?;
        if let Some(upvotes) = self.upvotes {
            feature.upvotes = upvotes;
        }
        if let Some(comments) = self.comments {
            feature.comments = comments;
        }
        if let Some(total) = self.rating_total {
            feature.rating_total = total;
        }
        if let Some(count) = self.rating_count {
            feature.rating_count = count;
        }
        if let Some(starred) = self.is_starred {
            feature.is_starred = starred;
        }
        self.apply_fields(feature);
        feature.refresh_rating();
        feature.updated_at = now;
        Ok(())
    }

    fn apply_fields(self, feature: &mut Feature) {
        let text = [
            (self.title, &mut feature.title),
            (self.date, &mut feature.date),
            (self.icon, &mut feature.icon),
            (self.status, &mut feature.status),
            (self.description, &mut feature.description),
            (self.tldr, &mut feature.tldr),
            (self.category, &mut feature.category),
        ];
        for (value, slot) in text {
            if let Some(v) = value {
                *slot = v;
            }
        }
        if let Some(tags) = self.tags {
            feature.tags = normalize_tags(tags);
        }
        if let Some(links) = self.links {
            feature.links = normalize_links(links);
        }
        if self.image.is_some() {
            feature.image = self.image;
        }
    }
}

/// Coerce tag values to strings. Nulls are dropped.
pub fn normalize_tags(tags: Vec<JsonValue>) -> Vec<String> {
    tags.into_iter()
        .filter_map(|tag| match tag {
            JsonValue::Null => None,
            JsonValue::String(s) => Some(s),
            other => Some(other.to_string()),
        })
        .collect()
}

/// Keep links that have a title or a url; fill the missing part with "".
pub fn normalize_links(links: Vec<Option<LinkInput>>) -> Vec<Link> {
    links
        .into_iter()
        .flatten()
        .filter(|l| {
            l.title.as_deref().map_or(false, |t| !t.is_empty())
                || l.url.as_deref().map_or(false, |u| !u.is_empty())
        })
        .map(|l| Link {
            title: l.title.unwrap_or_default(),
            url: l.url.unwrap_or_default(),
        })
        .collect()
}

/// Body of `PUT /features/{id}/rating`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSubmission {
    /// New rating, 1 to 5
    pub rating: f64,
    /// Voter's previous rating, 0 if none
    #[serde(default)]
    pub previous_rating: f64,
}

/// Body of `PUT /features/{id}/star`. A missing flag means "star".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarRequest {
    /// Desired star state
    #[serde(default = "default_starred")]
    pub is_starred: bool,
}

impl Default for StarRequest {
    fn default() -> Self {
        Self { is_starred: true }
    }
}

fn default_starred() -> bool {
    true
}
