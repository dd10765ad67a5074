//! Request-shape validation applied before calling the catalog

use albums_common::AlbumId;

use super::error::ApiError;

/// Inclusive year range accepted by `/albums/search`
pub const MIN_SEARCH_YEAR: i32 = 1900;
pub const MAX_SEARCH_YEAR: i32 = 2100;

pub const INVALID_ALBUM_ID: &str = "Invalid album ID";
pub const INVALID_YEAR: &str = "Invalid year";

/// Parse a path segment as a positive album id
pub fn parse_album_id(raw: &str) -> Result<AlbumId, ApiError> {
    match raw.trim().parse::<AlbumId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::BadRequest(INVALID_ALBUM_ID.to_string())),
    }
}

/// Parse the `year` query parameter and check it is within 1900-2100
pub fn parse_search_year(raw: Option<&str>) -> Result<i32, ApiError> {
    raw.and_then(|value| value.trim().parse::<i32>().ok())
        .filter(|year| (MIN_SEARCH_YEAR..=MAX_SEARCH_YEAR).contains(year))
        .ok_or_else(|| ApiError::BadRequest(INVALID_YEAR.to_string()))
}
