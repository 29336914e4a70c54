//! Config command handler.

use std::sync::Arc;

use crate::bridge::Primitives;
use crate::{Output, Result};

/// Handle ConfigGet command: return the active board configuration.
pub fn config_get(p: &Arc<Primitives>) -> Result<Output> {
    Ok(Output::Config(p.config.clone()))
}
