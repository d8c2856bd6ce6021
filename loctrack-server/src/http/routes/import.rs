//! CSV upload endpoint

use axum::{
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::import::{import_csv, ImportReport};
use crate::models::{CsvFileName, ValidationError};
use crate::state::AppState;

/// Multipart field carrying the upload
const FILE_FIELD: &str = "file";

/// POST /import - bulk-import a `.csv` upload
///
/// The file name is checked before any of the upload body is read.
async fn import_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImportReport>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = CsvFileName::new(field.file_name().unwrap_or_default())?;
        tracing::info!(file = file_name.as_str(), "Importing CSV upload");

        let data = field.bytes().await?;
        let report = import_csv(state.store(), &data).await?;
        return Ok(Json(report));
    }

    Err(ValidationError::Missing { field: FILE_FIELD }.into())
}

/// Import routes
pub fn router() -> Router<AppState> {
    Router::new().route("/import", post(import_file))
}
