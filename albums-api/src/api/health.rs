//! Health check and API information endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// Route summary returned by `GET /`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointList {
    pub get_all: &'static str,
    pub get_by_id: &'static str,
    pub search: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub message: String,
    pub status: String,
    pub endpoints: EndpointList,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "albums-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /
pub async fn api_info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        message: format!("Album API v{}", env!("CARGO_PKG_VERSION")),
        status: "running".to_string(),
        endpoints: EndpointList {
            get_all: "GET /albums",
            get_by_id: "GET /albums/:id",
            search: "GET /albums/search?year=YYYY",
            create: "POST /albums",
            update: "PUT /albums/:id",
            delete: "DELETE /albums/:id",
        },
    })
}

/// Build health check and info routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health_check))
}
