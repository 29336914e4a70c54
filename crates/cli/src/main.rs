//! featureboard command-line client
//!
//! Runs the client container against a file-backed board in `--data`.
//! Votes go through the same optimistic path a UI would use; the voter's
//! ratings are remembered in the data directory.

mod commands;
mod format;

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = commands::build().get_matches();
    let data = matches
        .get_one::<PathBuf>("data")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(commands::DEFAULT_DATA_DIR));
    let json = matches.get_flag("json");
    debug!(data = %data.display(), "Opening board");

    let mut board = commands::open(&data)?;
    let out = commands::run(&mut board, &matches, json)?;
    if !out.is_empty() {
        println!("{}", out);
    }
    Ok(())
}
