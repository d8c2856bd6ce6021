//! HTTP server layer
//!
//! Axum server with:
//! - CORS limited to one frontend origin
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server};
pub use error::ApiError;
