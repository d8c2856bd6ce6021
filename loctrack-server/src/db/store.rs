//! Persistence seam shared by the HTTP layer and the CSV importer

use async_trait::async_trait;

use crate::models::{FeatureCollection, Location, NewLocation, Pagination};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage for location records.
///
/// Implementations hand out a connection per call and release it when the
/// call returns, whether it succeeded or not.
#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Insert one record and return it with its assigned id.
    async fn create(&self, new: NewLocation) -> Result<Location, DbError>;

    /// Up to `page.limit` records after skipping `page.skip`.
    async fn list(&self, page: Pagination) -> Result<Vec<Location>, DbError>;

    /// Every record, unpaginated.
    async fn all(&self) -> Result<Vec<Location>, DbError>;

    /// Remove every record, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, DbError>;
}

/// Render every stored record as a GeoJSON FeatureCollection.
pub async fn export_geojson(store: &dyn LocationStore) -> Result<FeatureCollection, DbError> {
    let locations = store.all().await?;
    Ok(FeatureCollection::from_locations(locations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryLocationStore;
    use crate::models::Geometry;

    #[tokio::test]
    async fn export_covers_every_record() {
        let store = MemoryLocationStore::new();
        for i in 0..150 {
            store
                .create(NewLocation {
                    name: format!("p{}", i),
                    category: "Shop".into(),
                    latitude: 10.0,
                    longitude: 20.0,
                })
                .await
                .unwrap();
        }

        let collection = export_geojson(&store).await.unwrap();
        assert_eq!(collection.features.len(), 150);
        assert_eq!(
            collection.features[0].geometry,
            Geometry::Point { coordinates: [20.0, 10.0] }
        );
    }
}
