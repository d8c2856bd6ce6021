//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use loctrack_server::db::migrations;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides DATABASE_URL and LOCTRACK_DB_TARGET)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Create the locations schema
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = super::connect(args.database_url).await?;
    migrations::run(&pool).await.context("Failed to run migrations")?;
    pool.close().await;
    Ok(())
}
