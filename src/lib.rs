//! featureboard: a feature catalog with vote aggregation
//!
//! Viewers upvote, rate (1 to 5) and star features. The server keeps
//! running rating aggregates; the client applies votes optimistically and
//! reconciles them against the server's answer.
//!
//! # Quick start
//!
//! ```text
//! use featureboard::{Board, FeatureBoard, FeatureInput, LocalTransport, MemoryKv, VoterRatings};
//!
//! let board = Board::in_memory();
//! let voter = VoterRatings::new(Arc::new(MemoryKv::new()));
//! let mut client = FeatureBoard::new(LocalTransport::new(board.executor().clone()), voter);
//!
//! let gpt5 = client.add(&FeatureInput::titled("GPT-5"))?;
//! client.rate(&gpt5.id, 4.0)?;
//! ```

mod types;

pub use types::*;

/// Server-side building blocks
pub mod server {
    pub use featureboard_executor::http;
    pub use featureboard_executor::{Command, Executor, Output};
}
