//! Board configuration and open options
//!
//! `BoardConfig` lives in `featureboard.toml` inside the data directory. A
//! missing file is created with defaults on first open; unknown keys are
//! ignored and missing keys take their defaults.
//!
//! ```toml
//! seed_defaults = true
//! snapshot_file = "features.json"
//! voter_file = "votes.json"
//!
//! [limits]
//! title = 255
//! tldr = 300
//! ```

use featureboard_core::Limits;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::{Error, Result};

/// Name of the config file inside a data directory.
pub const CONFIG_FILE_NAME: &str = "featureboard.toml";

/// Persistent board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Insert the built-in catalog when the store is empty on open
    pub seed_defaults: bool,
    /// Snapshot file name, relative to the data directory
    pub snapshot_file: String,
    /// Voter rating memory file name, relative to the data directory
    pub voter_file: String,
    /// Text field limits
    pub limits: Limits,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed_defaults: true,
            snapshot_file: "features.json".to_string(),
            voter_file: "votes.json".to_string(),
            limits: Limits::default(),
        }
    }
}

impl BoardConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::InvalidInput {
            reason: format!("invalid {}: {}", CONFIG_FILE_NAME, e),
        })
    }

    /// Render the config as TOML text.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Serialization {
            reason: e.to_string(),
        })
    }

    /// Load `featureboard.toml` from `dir`, writing defaults if it is missing.
    pub fn load_or_create(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        match fs::read_to_string(&path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = Self::default();
                fs::create_dir_all(dir).map_err(|e| Error::Io {
                    reason: format!("{}: {}", dir.display(), e),
                })?;
                fs::write(&path, config.to_toml()?).map_err(|e| Error::Io {
                    reason: format!("{}: {}", path.display(), e),
                })?;
                info!(path = %path.display(), "Wrote default config");
                Ok(config)
            }
            Err(e) => Err(Error::Io {
                reason: format!("{}: {}", path.display(), e),
            }),
        }
    }
}

/// Controls whether the board allows writes or is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessMode {
    /// Allow both reads and writes (default).
    #[default]
    ReadWrite,
    /// Read-only mode: every mutating command returns `AccessDenied`.
    ReadOnly,
}

/// Options for opening a board.
///
/// ```text
/// let opts = OpenOptions::new().access_mode(AccessMode::ReadOnly);
/// let board = Board::open_with("/data", opts)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    /// The access mode for the board.
    pub access_mode: AccessMode,
    /// Config override; when `None` the data directory's config file is used.
    pub config: Option<BoardConfig>,
}

impl OpenOptions {
    /// Create a new `OpenOptions` with default settings (read-write mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access mode for the board.
    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.access_mode = mode;
        self
    }

    /// Use this config instead of reading the config file.
    pub fn config(mut self, config: BoardConfig) -> Self {
        self.config = Some(config);
        self
    }
}
