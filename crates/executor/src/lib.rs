//! Command execution layer for featureboard
//!
//! Every operation on the board is a [`Command`] executed by the
//! [`Executor`], producing an [`Output`] or an [`Error`]. Two front ends sit
//! on top of it:
//!
//! - [`Board`]: typed Rust API (`board.upvote(&id)?`)
//! - [`http`]: transport-agnostic request router for mounting in any HTTP server
//!
//! # Example
//!
//! ```text
//! use featureboard_executor::Board;
//!
//! let board = Board::open("/path/to/data")?;
//! let feature = board.upvote(&"seed-gpt5".into())?;
//! println!("{} upvotes", feature.upvotes);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
mod bridge;
pub mod command;
pub mod config;
mod convert;
pub mod error;
pub mod executor;
mod handlers;
pub mod http;
pub mod output;

pub use api::Board;
pub use command::Command;
pub use config::{AccessMode, BoardConfig, OpenOptions, CONFIG_FILE_NAME};
pub use error::Error;
pub use executor::Executor;
pub use output::Output;

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;
