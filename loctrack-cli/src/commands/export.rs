//! GeoJSON export command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use loctrack_server::db::{export_geojson, PgLocationStore};

/// Arguments for the export command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Output file (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Database URL (overrides DATABASE_URL and LOCTRACK_DB_TARGET)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Write every location as a FeatureCollection
pub async fn run_export(args: ExportArgs) -> Result<()> {
    let pool = super::connect(args.database_url).await?;
    let store = PgLocationStore::new(pool);
    let collection = export_geojson(&store).await?;
    store.pool().close().await;

    let json = serde_json::to_string_pretty(&collection)?;
    match args.output {
        Some(path) => {
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(
                features = collection.features.len(),
                "Wrote GeoJSON to {}",
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
