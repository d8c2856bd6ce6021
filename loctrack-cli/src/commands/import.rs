//! CSV import command
//!
//! Runs the same import routine as `POST /import` against a local file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use loctrack_server::db::PgLocationStore;
use loctrack_server::import::{check_csv, import_csv};
use loctrack_server::models::CsvFileName;

/// Arguments for the import command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// CSV file with Name,Category,Latitude,Longitude columns
    pub file: PathBuf,

    /// Database URL (overrides DATABASE_URL and LOCTRACK_DB_TARGET)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Validate rows and print the report without writing to the database
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Import a CSV file and print the report as JSON
pub async fn run_import(args: ImportArgs) -> Result<()> {
    let file_name = args
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    CsvFileName::new(file_name)?;

    let bytes = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let report = if args.dry_run {
        check_csv(&bytes)?
    } else {
        let pool = super::connect(args.database_url).await?;
        let store = PgLocationStore::new(pool);
        let report = import_csv(&store, &bytes).await?;
        store.pool().close().await;
        report
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
