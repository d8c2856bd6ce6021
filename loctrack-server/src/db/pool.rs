//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Startup connects with a
//! bounded number of attempts and a fixed delay between them.

use std::future::Future;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::error::{Error, Result};

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::new("postgres://localhost/location_tracker")).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> std::result::Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await
}

/// Connect and verify the database, retrying on failure.
///
/// Gives up after `config.connect_attempts` attempts with
/// [`Error::Unreachable`].
pub async fn connect_with_retry(config: &DatabaseConfig) -> Result<PgPool> {
    retry(config.connect_attempts, config.retry_interval, move || async move {
        let pool = create_pool(config).await?;
        sqlx::query("SELECT 1").execute(&pool).await?;
        Ok::<_, sqlx::Error>(pool)
    })
    .await
    .map_err(|source| Error::Unreachable {
        attempts: config.connect_attempts,
        source,
    })
}

/// Run `op` up to `attempts` times (at least once), sleeping `interval`
/// between failures. Returns the last error when every attempt fails.
pub async fn retry<T, F, Fut>(
    attempts: u32,
    interval: Duration,
    mut op: F,
) -> std::result::Result<T, sqlx::Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, sqlx::Error>>,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt >= attempts => return Err(e),
            Err(e) => {
                tracing::warn!(
                    attempt,
                    max_attempts = attempts,
                    retry_in_secs = interval.as_secs_f64(),
                    error = %e,
                    "Database connection attempt failed, retrying"
                );
                tokio::time::sleep(interval).await;
                attempt += 1;
            }
        }
    }
}
