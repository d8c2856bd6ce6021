//! Axum server setup
//!
//! Server skeleton with:
//! - CORS for a single configured origin
//! - Tracing middleware
//! - Upload size limit
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::ServerConfig;
use crate::db::LocationStore;
use crate::error::{Error, Result};
use crate::state::AppState;

/// CORS layer allowing exactly one browser origin.
///
/// The origin header is only echoed back when the request's `Origin` matches.
fn cors_layer(origin: &str) -> Result<CorsLayer> {
    // Wildcards are incompatible with credentialed requests
    if origin.trim() == "*" {
        return Err(Error::Config("CORS origin must not be '*'".to_string()));
    }
    let origin: HeaderValue = origin
        .parse()
        .map_err(|_| Error::Config(format!("invalid CORS origin '{}'", origin)))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Build the application router with all routes.
pub fn build_router(state: AppState, config: &ServerConfig) -> Result<Router> {
    let cors = cors_layer(&config.allowed_origin)?;

    Ok(Router::new()
        .merge(routes::health::router())
        .merge(routes::locations::router())
        .merge(routes::import::router())
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = connect_with_retry(&DatabaseConfig::from_env()?).await?;
/// run_server(Arc::new(PgLocationStore::new(pool)), ServerConfig::default()).await?;
/// ```
pub async fn run_server(store: Arc<dyn LocationStore>, config: ServerConfig) -> Result<()> {
    let app = build_router(AppState::new(store), &config)?;

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        origin = %config.allowed_origin,
        "Server listening on {}",
        config.bind_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}
