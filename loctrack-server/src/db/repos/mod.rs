//! PostgreSQL-backed repositories

pub mod locations;

pub use locations::PgLocationStore;
