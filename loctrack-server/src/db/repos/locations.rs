//! Location repository
//!
//! Single-table CRUD over `locations`:
//! - create: INSERT ... RETURNING (one statement, id from the sequence)
//! - list: ORDER BY id with LIMIT/OFFSET
//! - delete_all: one DELETE, all-or-nothing

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::{DbError, LocationStore};
use crate::models::{Location, NewLocation, Pagination};

/// Location store over a PostgreSQL pool
#[derive(Clone)]
pub struct PgLocationStore {
    pool: PgPool,
}

impl PgLocationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl LocationStore for PgLocationStore {
    async fn create(&self, new: NewLocation) -> Result<Location, DbError> {
        let location: Location = sqlx::query_as(
            r#"
            INSERT INTO locations (name, category, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, category, latitude, longitude
            "#,
        )
        .bind(&new.name)
        .bind(&new.category)
        .bind(new.latitude)
        .bind(new.longitude)
        .fetch_one(&self.pool)
        .await?;

        Ok(location)
    }

    async fn list(&self, page: Pagination) -> Result<Vec<Location>, DbError> {
        let locations: Vec<Location> = sqlx::query_as(
            r#"
            SELECT id, name, category, latitude, longitude
            FROM locations
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(locations)
    }

    async fn all(&self) -> Result<Vec<Location>, DbError> {
        let locations: Vec<Location> = sqlx::query_as(
            "SELECT id, name, category, latitude, longitude FROM locations ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(locations)
    }

    async fn delete_all(&self) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM locations")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
