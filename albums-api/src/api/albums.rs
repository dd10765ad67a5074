//! Album CRUD and search endpoints
//!
//! Each handler performs the boundary checks for its route, then makes
//! exactly one catalog call under one lock acquisition.

use albums_common::{Album, AlbumDraft};
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::error::{ApiError, ALBUM_DATA_REQUIRED, INVALID_JSON_BODY};
use super::params::{parse_album_id, parse_search_year};
use crate::AppState;

/// Query parameters for year search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Kept as text so malformed values produce "Invalid year"
    pub year: Option<String>,
}

/// GET /albums
pub async fn list_albums(State(state): State<AppState>) -> Json<Vec<Album>> {
    let catalog = state.catalog.read().await;
    Json(catalog.list_all())
}

/// GET /albums/search?year=2020
///
/// Empty array when nothing matches; 400 when the year is missing,
/// malformed or outside 1900-2100.
pub async fn search_albums(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Album>>, ApiError> {
    let year = parse_search_year(query.year.as_deref())?;

    let catalog = state.catalog.read().await;
    Ok(Json(catalog.search_by_year(year)))
}

/// GET /albums/:id
pub async fn get_album(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Album>, ApiError> {
    let id = parse_album_id(&raw_id)?;

    let catalog = state.catalog.read().await;
    Ok(Json(catalog.get_by_id(id)?))
}

/// POST /albums
///
/// Returns 201 with the stored album and a Location header.
pub async fn create_album(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let draft = require_draft(&body)?;

    let album = state.catalog.write().await.create(draft)?;
    let location = format!("/albums/{}", album.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(album),
    ))
}

/// PUT /albums/:id
///
/// Full replacement: fields missing from the body are not kept.
pub async fn update_album(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Album>, ApiError> {
    let id = parse_album_id(&raw_id)?;
    let draft = require_draft(&body)?;

    let album = state.catalog.write().await.update(id, draft)?;
    Ok(Json(album))
}

/// DELETE /albums/:id
///
/// 204 with no body; a missing album yields the same 404 body as GET.
pub async fn delete_album(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_album_id(&raw_id)?;

    state.catalog.write().await.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Decode a request body into a draft
///
/// Only an empty body or JSON `null` means the album data is missing.
/// Anything else present is handed to the draft conversion, which
/// reports absent title/artist itself.
fn require_draft(body: &[u8]) -> Result<AlbumDraft, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::BadRequest(ALBUM_DATA_REQUIRED.to_string()));
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        debug!("Rejected album body: {}", e);
        ApiError::BadRequest(INVALID_JSON_BODY.to_string())
    })?;

    if value.is_null() {
        return Err(ApiError::BadRequest(ALBUM_DATA_REQUIRED.to_string()));
    }
    Ok(AlbumDraft::from_json(value)?)
}
