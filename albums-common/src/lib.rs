//! # Albums Common Library
//!
//! Shared code for the album catalog service:
//! - Album/Artist data model and drafts
//! - The in-memory catalog and its seed set
//! - Configuration loading
//! - Error types

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use models::{Album, AlbumDraft, AlbumId, Artist};
