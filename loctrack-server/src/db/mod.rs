//! Database layer - connection pool and location storage
//!
//! - `LocationStore` is the seam handlers and the importer talk to
//! - `PgLocationStore` borrows a pooled connection per statement
//! - `MemoryLocationStore` keeps rows in process for tests and demos

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryLocationStore;
pub use pool::{connect_with_retry, create_pool};
pub use repos::PgLocationStore;
pub use store::{export_geojson, DbError, LocationStore};
pub use sqlx::PgPool;
