//! Domain models
//!
//! Input is parsed into typed values at the edge; failures become
//! `ValidationError`, not panics.

pub mod validation;
pub mod location;
pub mod pagination;
pub mod geojson;
pub mod upload;

pub use validation::ValidationError;
pub use location::{Location, NewLocation};
pub use pagination::{ListParams, Pagination, DEFAULT_LIMIT};
pub use geojson::{Feature, FeatureCollection, FeatureProperties, Geometry};
pub use upload::CsvFileName;
