//! loctrack CLI - location-tracking API server and maintenance commands
//!
//! - `serve`: run the HTTP API
//! - `migrate`: create the locations schema
//! - `import`: bulk-load a CSV file straight into the database
//! - `export`: write every location as GeoJSON

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "loctrack",
    author,
    version,
    about = "Store named geographic points and serve them over HTTP",
    long_about = "Stores named points (name, category, latitude, longitude) in PostgreSQL, \
                  serves them as JSON and GeoJSON, and bulk-imports them from CSV files."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the locations table and indexes
    Migrate(commands::migrate::MigrateArgs),
    /// Import locations from a CSV file
    Import(commands::import::ImportArgs),
    /// Export all locations as a GeoJSON FeatureCollection
    Export(commands::export::ExportArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_files = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    config::log_loaded(&env_files);

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::Import(args) => commands::run_import(args).await?,
        Commands::Export(args) => commands::run_export(args).await?,
    }

    Ok(())
}
