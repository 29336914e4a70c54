//! Catalog command handlers.
//!
//! List, get, create, update and delete. Create and update normalize their
//! input through [`FeatureInput`] and enforce the configured field limits.

use std::sync::Arc;

use chrono::Utc;
use featureboard_core::{FeatureId, FeatureInput};
use tracing::info;

use crate::bridge::{validate_id, Primitives};
use crate::convert::convert_result;
use crate::{Error, Output, Result};

/// Handle FeatureList command.
pub fn feature_list(p: &Arc<Primitives>) -> Result<Output> {
    let features = p.store.list().into_iter().map(|row| row.feature).collect();
    Ok(Output::Features(features))
}

/// Handle FeatureGet command.
pub fn feature_get(p: &Arc<Primitives>, id: FeatureId) -> Result<Output> {
    validate_id(&id)?;
    match p.store.get(&id) {
        Some(row) => Ok(Output::Feature(row.feature)),
        None => Err(Error::FeatureNotFound { id: id.to_string() }),
    }
}

/// Handle FeatureCreate command.
///
/// Assigns a fresh id; counters and rating aggregates start at zero.
pub fn feature_create(p: &Arc<Primitives>, input: FeatureInput) -> Result<Output> {
    p.require_writable()?;
    let feature = input.into_feature(FeatureId::generate(), Utc::now(), &p.config.limits)?;
    let row = convert_result(p.store.insert(feature))?;
    info!(id = %row.feature.id, title = %row.feature.title, "Created feature");
    Ok(Output::Feature(row.feature))
}

/// Handle FeatureUpdate command.
pub fn feature_update(p: &Arc<Primitives>, id: FeatureId, input: FeatureInput) -> Result<Output> {
    p.require_writable()?;
    validate_id(&id)?;
    let limits = p.config.limits;
    let row = convert_result(
        p.store
            .update(&id, |feature| input.apply_to(feature, Utc::now(), &limits)),
    )?;
    Ok(Output::Feature(row.feature))
}

/// Handle FeatureDelete command.
pub fn feature_delete(p: &Arc<Primitives>, id: FeatureId) -> Result<Output> {
    p.require_writable()?;
    validate_id(&id)?;
    if !convert_result(p.store.delete(&id))? {
        return Err(Error::FeatureNotFound { id: id.to_string() });
    }
    info!(id = %id, "Deleted feature");
    Ok(Output::Deleted { id })
}
