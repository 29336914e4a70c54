//! Text field length limits.
//!
//! Defaults match the column widths of the `features` table schema.

use serde::{Deserialize, Serialize};

use crate::error::{FeatureError, FeatureResult};

/// Maximum character counts for the bounded text fields of a feature.
///
/// `description`, `image`, tags and links are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Max characters in `title`
    pub title: usize,
    /// Max characters in `date`
    pub date: usize,
    /// Max characters in `icon`
    pub icon: usize,
    /// Max characters in `status`
    pub status: usize,
    /// Max characters in `tldr`
    pub tldr: usize,
    /// Max characters in `category`
    pub category: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            title: 255,
            date: 100,
            icon: 64,
            status: 50,
            tldr: 300,
            category: 100,
        }
    }
}

impl Limits {
    /// Check a single field against its maximum.
    pub fn check(field: &'static str, value: &str, max: usize) -> FeatureResult<()> {
        let len = value.chars().count();
        if len > max {
            return Err(FeatureError::FieldTooLong { field, len, max });
        }
        Ok(())
    }
}
