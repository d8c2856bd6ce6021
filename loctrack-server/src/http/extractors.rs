//! Custom Axum extractors
//!
//! Wrap axum's JSON and query extractors so malformed input comes back as
//! an `ApiError` body instead of axum's plain-text rejection.

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{ListParams, Pagination, ValidationError};

/// JSON request body
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::Malformed {
                field: "request body",
                reason: rejection.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}

/// `skip`/`limit` query parameters
pub struct ListQuery(pub Pagination);

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::Malformed {
                    field: "query",
                    reason: rejection.body_text(),
                })
            })?;

        Ok(Self(Pagination::from(params)))
    }
}
