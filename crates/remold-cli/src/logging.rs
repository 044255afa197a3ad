//! Logging setup for the Remold CLI
//!
//! Maps the `-v` verbosity flags to a tracing level filter, honoring a
//! `RUST_LOG` override, and writes to stderr so transformation output on
//! stdout stays clean.

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
pub fn init(verbosity: u8, quiet: bool) -> Result<()> {
    let level = default_level(verbosity, quiet);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .try_init()
        .map_err(|e| Error::other(format!("failed to initialize logging: {e}")))
}

fn default_level(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
