//! Tracing setup for the loctrack CLI
//!
//! Usage:
//!   loctrack --debug ...               # Debug logging
//!   RUST_LOG=loctrack_server=debug ... # Fine-grained log control
//!
//! Logs go to stderr so `export` can write GeoJSON to stdout.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets debug level if RUST_LOG is not set)
    pub debug: bool,
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
