//! albums-api library - REST adapter for the album catalog
//!
//! Wraps an [`albums_common::Catalog`] in shared state and exposes it
//! over HTTP with the boundary checks the catalog itself leaves to
//! callers (id format, year range, body presence).

use std::sync::Arc;

use albums_common::Catalog;
use axum::Router;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers
///
/// Each handler takes the lock once for the whole catalog operation;
/// concurrent writes to one album resolve last-writer-wins.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RwLock<Catalog>>,
}

impl AppState {
    /// Create new application state around `catalog`
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    // /albums/search must precede /albums/:id
    let albums = Router::new()
        .route("/albums", get(api::list_albums).post(api::create_album))
        .route("/albums/search", get(api::search_albums))
        .route(
            "/albums/:id",
            get(api::get_album)
                .put(api::update_album)
                .delete(api::delete_album),
        );

    Router::new()
        .merge(albums)
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
