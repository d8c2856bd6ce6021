//! Location endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::export_geojson;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ListQuery};
use crate::models::{FeatureCollection, Location, NewLocation};
use crate::state::AppState;

/// Confirmation returned by `DELETE /locations`
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub deleted: u64,
}

/// POST /locations - store one point
async fn create_location(
    State(state): State<AppState>,
    JsonBody(new): JsonBody<NewLocation>,
) -> Result<(StatusCode, Json<Location>), ApiError> {
    let location = state.store().create(new).await?;
    tracing::debug!(id = location.id, "Location created");

    Ok((StatusCode::CREATED, Json(location)))
}

/// GET /locations - offset/limit listing
async fn list_locations(
    State(state): State<AppState>,
    ListQuery(page): ListQuery,
) -> Result<Json<Vec<Location>>, ApiError> {
    let locations = state.store().list(page).await?;
    Ok(Json(locations))
}

/// GET /locations/geojson - every point as a FeatureCollection
async fn locations_geojson(
    State(state): State<AppState>,
) -> Result<Json<FeatureCollection>, ApiError> {
    let collection = export_geojson(state.store()).await?;
    Ok(Json(collection))
}

/// DELETE /locations - remove every point
async fn delete_all_locations(
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = state.store().delete_all().await?;
    tracing::info!(deleted, "All locations deleted");

    Ok(Json(DeleteResponse {
        message: "All locations deleted successfully".to_string(),
        deleted,
    }))
}

/// Location routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/locations",
            get(list_locations)
                .post(create_location)
                .delete(delete_all_locations),
        )
        .route("/locations/geojson", get(locations_geojson))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::db::MemoryLocationStore;

    fn app() -> Router {
        router().with_state(AppState::new(Arc::new(MemoryLocationStore::new())))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn create(name: &str, latitude: f64, longitude: f64) -> Request<Body> {
        let body = json!({
            "name": name,
            "category": "Park",
            "latitude": latitude,
            "longitude": longitude,
        });
        Request::builder()
            .method("POST")
            .uri("/locations")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn create_then_list() {
        let app = app();

        let (status, created) = send(&app, create("Central Park", 40.78, -73.97)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(created["id"].as_i64().is_some());
        assert_eq!(created["name"], "Central Park");

        let (status, listed) = send(&app, get("/locations")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed, json!([created]));
    }

    #[tokio::test]
    async fn list_applies_skip_and_limit() {
        let app = app();
        for i in 0..5 {
            send(&app, create(&format!("p{}", i), 1.0, 2.0)).await;
        }

        let (_, listed) = send(&app, get("/locations?skip=1&limit=2")).await;
        let names: Vec<_> = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["p1", "p2"]);

        let (_, listed) = send(&app, get("/locations?skip=4")).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn bad_query_is_400() {
        let app = app();
        let (status, body) = send(&app, get("/locations?limit=-1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "validation_error");
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let app = app();
        let request = Request::builder()
            .method("POST")
            .uri("/locations")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name": "x", "category": "y", "latitude": "north"}"#))
            .unwrap();

        let (status, body) = send(&app, request).await;
        assert!(status.is_client_error());
        assert_eq!(body["kind"], "validation_error");
        assert!(body["detail"].as_str().unwrap().starts_with("invalid request body"));
    }

    #[tokio::test]
    async fn geojson_uses_lon_lat() {
        let app = app();
        send(&app, create("A", 40.0, -73.0)).await;
        send(&app, create("B", -33.86, 151.2)).await;

        let (status, body) = send(&app, get("/locations/geojson")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["type"], "FeatureCollection");
        assert_eq!(body["features"][0]["geometry"]["coordinates"], json!([-73.0, 40.0]));
        assert_eq!(body["features"][1]["geometry"]["coordinates"], json!([151.2, -33.86]));
        assert_eq!(body["features"][1]["properties"]["name"], "B");
    }

    #[tokio::test]
    async fn delete_all_then_list_is_empty() {
        let app = app();
        send(&app, create("A", 1.0, 2.0)).await;
        send(&app, create("B", 3.0, 4.0)).await;

        let request = Request::builder()
            .method("DELETE")
            .uri("/locations")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "All locations deleted successfully");
        assert_eq!(body["deleted"], 2);

        let (_, listed) = send(&app, get("/locations")).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_ids() {
        let app = app();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let app = app.clone();
                tokio::spawn(async move {
                    let (_, body) = send(&app, create(&format!("p{}", i), 0.0, 0.0)).await;
                    body["id"].as_i64().unwrap()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }
        assert_eq!(ids.len(), 20);
    }
}
