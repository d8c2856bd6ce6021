//! loctrack-server: HTTP API for named geographic points
//!
//! Stores points in PostgreSQL, lists them, renders them as GeoJSON and
//! bulk-imports them from CSV uploads.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod import;
pub mod models;
pub mod state;

pub use config::{DatabaseConfig, ServerConfig};
pub use error::{Error, Result};
pub use state::AppState;
