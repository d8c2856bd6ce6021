//! HTTP server command
//!
//! Connects to PostgreSQL (with startup retries) and runs the location API.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use loctrack_server::config::DEFAULT_ALLOWED_ORIGIN;
use loctrack_server::db::{migrations, LocationStore, MemoryLocationStore, PgLocationStore};
use loctrack_server::http::run_server;
use loctrack_server::ServerConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "LOCTRACK_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// The one browser origin allowed to call the API
    #[arg(long, env = "LOCTRACK_CORS_ORIGIN", default_value = DEFAULT_ALLOWED_ORIGIN)]
    pub cors_origin: String,

    /// Database URL (overrides DATABASE_URL and LOCTRACK_DB_TARGET)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Create the schema before serving
    #[arg(long, conflicts_with = "in_memory")]
    pub migrate: bool,

    /// Keep locations in process memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub in_memory: bool,

    /// Maximum request body size in bytes (CSV uploads included)
    #[arg(long, default_value_t = ServerConfig::default().max_upload_bytes)]
    pub max_upload_bytes: usize,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn LocationStore> = if args.in_memory {
        tracing::warn!("Using in-memory store - locations are lost on shutdown");
        Arc::new(MemoryLocationStore::new())
    } else {
        let pool = super::connect(args.database_url).await?;
        if args.migrate {
            migrations::run(&pool).await.context("Failed to run migrations")?;
        }
        Arc::new(PgLocationStore::new(pool))
    };

    let config = ServerConfig {
        bind_addr: args.bind,
        allowed_origin: args.cors_origin,
        max_upload_bytes: args.max_upload_bytes,
    };

    tracing::info!("Starting loctrack server on {}", config.bind_addr);

    // Blocks until shutdown
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
