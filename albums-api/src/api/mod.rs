//! HTTP API handlers for albums-api

pub mod albums;
pub mod error;
pub mod health;
pub mod params;

pub use albums::{create_album, delete_album, get_album, list_albums, search_albums, update_album};
pub use error::ApiError;
pub use health::health_routes;
