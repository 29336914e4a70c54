//! Command handlers, one module per command group.

pub mod config;
pub mod features;
pub mod votes;
