//! Location record and its insert shape

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored geographic point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A point that has not been stored yet.
///
/// Latitude and longitude are expected to fall in [-90, 90] and
/// [-180, 180] but are stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLocation {
    pub name: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewLocation {
    /// Attach a store-assigned id.
    pub fn with_id(self, id: i32) -> Location {
        Location {
            id,
            name: self.name,
            category: self.category,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
