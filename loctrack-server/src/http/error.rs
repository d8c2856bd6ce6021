//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": message, "detail": message, "kind": kind}`
//! bodies with the matching status code. Browser clients read either `error`
//! or `detail` for the text to show; `kind` is a stable code.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::import::ImportError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request input failed to parse or validate (400)
    Validation(ValidationError),

    /// Upload could not be decoded or parsed as CSV (400)
    Import(ImportError),

    /// Multipart stream was broken or too large (status from axum)
    Upload(MultipartError),

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, detail) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, "validation_error", e.to_string()),
            Self::Import(e) => (StatusCode::BAD_REQUEST, "invalid_upload", e.to_string()),
            Self::Upload(e) => (e.status(), "invalid_upload", e.body_text()),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "an internal error occurred".to_string(),
                )
            }
        };

        (
            status,
            Json(json!({ "error": detail, "detail": detail, "kind": kind })),
        )
            .into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ImportError> for ApiError {
    fn from(e: ImportError) -> Self {
        Self::Import(e)
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        Self::Upload(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let response = ApiError::Validation(ValidationError::NotCsv).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["kind"], "validation_error");
        assert_eq!(body["detail"], "File must be a CSV");
        assert_eq!(body["error"], "File must be a CSV");
    }

    #[tokio::test]
    async fn import_error_is_400() {
        let utf8_err = std::str::from_utf8(&[0xff]).unwrap_err();
        let response = ApiError::Import(ImportError::Decode(utf8_err)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn database_error_hides_cause() {
        let err = ApiError::Database(DbError::Unavailable("password=hunter2".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["detail"], "an internal error occurred");
        assert_eq!(body["error"], "an internal error occurred");
        assert_eq!(body["kind"], "internal_error");
    }
}
