//! Bridge between command handlers and the storage layer.
//!
//! Holds the shared [`Primitives`] bundle and the small validation helpers
//! every handler uses.

use featureboard_core::FeatureId;
use featureboard_storage::FeatureStore;

use crate::config::{AccessMode, BoardConfig};
use crate::{Error, Result};

/// Everything a handler needs: the store, the config, and the access mode.
#[derive(Debug)]
pub struct Primitives {
    pub store: FeatureStore,
    pub config: BoardConfig,
    pub access: AccessMode,
}

impl Primitives {
    pub fn new(store: FeatureStore, config: BoardConfig, access: AccessMode) -> Self {
        Self {
            store,
            config,
            access,
        }
    }

    /// Refuse writes on read-only boards.
    pub fn require_writable(&self) -> Result<()> {
        match self.access {
            AccessMode::ReadWrite => Ok(()),
            AccessMode::ReadOnly => Err(Error::AccessDenied {
                reason: "board is opened read-only".to_string(),
            }),
        }
    }
}

/// Reject blank ids before they reach the store.
pub fn validate_id(id: &FeatureId) -> Result<()> {
    if id.is_blank() {
        return Err(Error::InvalidInput {
            reason: "feature id must not be empty".to_string(),
        });
    }
    Ok(())
}
