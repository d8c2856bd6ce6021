//! Command implementations for the loctrack CLI

pub mod export;
pub mod import;
pub mod migrate;
pub mod serve;

use anyhow::{Context, Result};
use loctrack_server::db::{connect_with_retry, PgPool};
use loctrack_server::config::DbTarget;
use loctrack_server::DatabaseConfig;

pub use export::run_export;
pub use import::run_import;
pub use migrate::run_migrate;
pub use serve::run_serve;

/// Database settings from the environment, with an optional URL override.
pub fn database_config(url: Option<String>) -> Result<DatabaseConfig> {
    resolve_database_config(url, |key| std::env::var(key).ok(), DbTarget::detect())
}

/// An explicit URL stands in for `DATABASE_URL`, so the target is never consulted.
fn resolve_database_config<F>(url: Option<String>, lookup: F, detected: DbTarget) -> Result<DatabaseConfig>
where
    F: Fn(&str) -> Option<String>,
{
    DatabaseConfig::from_lookup(
        |key| match (key, &url) {
            ("DATABASE_URL", Some(url)) => Some(url.clone()),
            _ => lookup(key),
        },
        detected,
    )
    .context("Invalid database configuration")
}

/// Connect to the database, retrying per configuration.
pub async fn connect(url: Option<String>) -> Result<PgPool> {
    let config = database_config(url)?;
    tracing::info!(
        attempts = config.connect_attempts,
        "Connecting to database"
    );
    connect_with_retry(&config)
        .await
        .context("Failed to connect to database")
}
