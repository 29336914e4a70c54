//! Typed API over the executor.
//!
//! [`Board`] wraps an [`Executor`] and exposes one method per command with
//! concrete return types.
//!
//! # Example
//!
//! ```text
//! use featureboard_executor::Board;
//!
//! let board = Board::in_memory();
//! let feature = board.create(FeatureInput::titled("GPT-5"))?;
//! board.rate(&feature.id, 4.0, 0.0)?;
//! ```

mod features;

use std::path::Path;

use chrono::Utc;
use featureboard_core::seed;
use featureboard_storage::FeatureStore;
use tracing::info;

use crate::config::{AccessMode, BoardConfig, OpenOptions};
use crate::convert::convert_result;
use crate::{Command, Error, Executor, Output, Result};

/// Handle to a feature board.
#[derive(Debug, Clone)]
pub struct Board {
    executor: Executor,
}

impl Board {
    /// Open a file-backed board in `dir` with default options.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(dir, OpenOptions::default())
    }

    /// Open a file-backed board in `dir`.
    ///
    /// Reads (or creates) `featureboard.toml` unless the options carry a
    /// config, loads the snapshot, and seeds the built-in catalog into an
    /// empty store when `seed_defaults` is set and the board is writable.
    pub fn open_with(dir: impl AsRef<Path>, options: OpenOptions) -> Result<Self> {
        let dir = dir.as_ref();
        let config = match options.config {
            Some(config) => config,
            None => BoardConfig::load_or_create(dir)?,
        };
        let store = convert_result(FeatureStore::open(dir.join(&config.snapshot_file)))?;
        if config.seed_defaults && options.access_mode == AccessMode::ReadWrite {
            convert_result(store.seed_if_empty(seed::initial_features(Utc::now())))?;
        }
        info!(dir = %dir.display(), features = store.len(), "Opened board");
        Ok(Self {
            executor: Executor::new(store, config, options.access_mode),
        })
    }

    /// Create an empty in-memory board. Nothing is seeded.
    pub fn in_memory() -> Self {
        let config = BoardConfig {
            seed_defaults: false,
            ..BoardConfig::default()
        };
        Self {
            executor: Executor::new(FeatureStore::in_memory(), config, AccessMode::ReadWrite),
        }
    }

    /// Create an in-memory board, seeding it when `config.seed_defaults` is set.
    pub fn in_memory_with(config: BoardConfig) -> Result<Self> {
        let store = FeatureStore::in_memory();
        if config.seed_defaults {
            convert_result(store.seed_if_empty(seed::initial_features(Utc::now())))?;
        }
        Ok(Self {
            executor: Executor::new(store, config, AccessMode::ReadWrite),
        })
    }

    /// The underlying executor
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Get the active configuration.
    pub fn config(&self) -> Result<BoardConfig> {
        match self.executor.execute(Command::ConfigGet)? {
            Output::Config(cfg) => Ok(cfg),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ConfigGet".into(),
            }),
        }
    }
}
