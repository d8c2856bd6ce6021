//! Schema for the locations table
//!
//! Run explicitly (`loctrack migrate` or `serve --migrate`), never as a
//! side effect of opening the pool.

use sqlx::PgPool;

use crate::Result;

/// Create the `locations` table and its name index if missing.
pub async fn run(pool: &PgPool) -> Result<()> {
    tracing::info!("Running location migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS locations (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            latitude DOUBLE PRECISION NOT NULL,
            longitude DOUBLE PRECISION NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS ix_locations_name ON locations (name)")
        .execute(pool)
        .await?;

    tracing::info!("Location migrations complete");
    Ok(())
}
