//! Diagnostic logging
//!
//! Logs go to stderr so they never interleave with the board on stdout.

use anyhow::{Result, anyhow};
use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `WORDIE_LOG=debug`
pub const LOG_ENV_VAR: &str = "WORDIE_LOG";

/// Install the global subscriber
///
/// # Errors
/// Returns an error if a global subscriber is already set.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
