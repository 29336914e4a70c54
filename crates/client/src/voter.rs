//! The voter's remembered ratings
//!
//! One number per feature id: the last rating this voter submitted. It is
//! sent back as `previousRating` so a revision replaces the old vote instead
//! of adding a new one. Losing this memory means the next submission counts
//! as a fresh vote.

use std::sync::Arc;

use featureboard_core::{normalize_previous, FeatureId};
use featureboard_storage::KeyValue;
use tracing::warn;

use crate::error::ClientResult;

/// Per-feature rating memory over an injected [`KeyValue`] store.
#[derive(Clone)]
pub struct VoterRatings {
    kv: Arc<dyn KeyValue>,
}

impl std::fmt::Debug for VoterRatings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoterRatings").finish_non_exhaustive()
    }
}

impl VoterRatings {
    /// Use `kv` as the backing store.
    pub fn new(kv: Arc<dyn KeyValue>) -> Self {
        Self { kv }
    }

    /// Last rating submitted for `id`, or 0.
    ///
    /// Unparseable or out-of-range entries read as 0.
    pub fn get(&self, id: &FeatureId) -> ClientResult<f64> {
        let Some(raw) = self.kv.get(&key(id))? else {
            return Ok(0.0);
        };
        match raw.trim().parse::<f64>() {
            Ok(value) => Ok(normalize_previous(value)),
            Err(_) => {
                warn!(feature = %id, value = %raw, "Ignoring unreadable stored rating");
                Ok(0.0)
            }
        }
    }

    /// Remember `rating` for `id`.
    pub fn set(&self, id: &FeatureId, rating: f64) -> ClientResult<()> {
        self.kv.set(&key(id), &rating.to_string())?;
        Ok(())
    }

    /// Forget `id`.
    pub fn forget(&self, id: &FeatureId) -> ClientResult<()> {
        self.kv.remove(&key(id))?;
        Ok(())
    }
}

fn key(id: &FeatureId) -> String {
    format!("rating:{}", id)
}
