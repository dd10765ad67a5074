//! In-memory album catalog
//!
//! Owns the album collection and the id counter. All operations are
//! synchronous linear scans; callers sharing a catalog across threads
//! wrap it in a single lock (see `albums-api`).

use tracing::{debug, info};

use crate::models::{Album, AlbumDraft, AlbumId};
use crate::seed::{seed_albums, FIRST_ALLOCATED_ID};
use crate::{Error, Result};

/// Album collection in insertion order plus the next id to allocate
///
/// Ids only move forward: a deleted id is never handed out again for
/// the lifetime of the catalog (short of `reset`).
#[derive(Debug, Clone)]
pub struct Catalog {
    albums: Vec<Album>,
    next_id: AlbumId,
}

impl Catalog {
    /// Catalog holding the six seed albums, next id 7
    pub fn seeded() -> Self {
        Self {
            albums: seed_albums(),
            next_id: FIRST_ALLOCATED_ID,
        }
    }

    /// All albums in catalog order
    pub fn list_all(&self) -> Vec<Album> {
        self.albums.clone()
    }

    /// Exact-match lookup; id validity is the caller's concern
    pub fn get_by_id(&self, id: AlbumId) -> Result<Album> {
        self.albums
            .iter()
            .find(|album| album.id == id)
            .cloned()
            .ok_or_else(Error::album_not_found)
    }

    /// Albums whose year equals `year`, in catalog order (possibly empty)
    ///
    /// No range check here: rejecting years outside 1900-2100 belongs to
    /// the request boundary.
    pub fn search_by_year(&self, year: i32) -> Vec<Album> {
        self.albums
            .iter()
            .filter(|album| album.year == year)
            .cloned()
            .collect()
    }

    /// Validate `draft`, assign the next id and append it
    pub fn create(&mut self, draft: AlbumDraft) -> Result<Album> {
        let album = draft.into_album(self.next_id)?;
        self.next_id += 1;
        self.albums.push(album.clone());

        info!("Created album {} \"{}\"", album.id, album.title);
        Ok(album)
    }

    /// Replace the album at `id` wholesale with `draft`
    ///
    /// Fields absent from the draft are not carried over from the stored
    /// version. Missing id is reported before draft validation.
    pub fn update(&mut self, id: AlbumId, draft: AlbumDraft) -> Result<Album> {
        let index = self.position(id).ok_or_else(Error::album_not_found)?;
        let album = draft.into_album(id)?;
        self.albums[index] = album.clone();

        info!("Updated album {}", id);
        Ok(album)
    }

    /// Remove the album at `id`
    pub fn delete(&mut self, id: AlbumId) -> Result<()> {
        let index = self.position(id).ok_or_else(Error::album_not_found)?;
        self.albums.remove(index);

        info!("Deleted album {}", id);
        Ok(())
    }

    /// Restore the seed set and rewind the id counter to 7
    ///
    /// Test support; production code builds a fresh catalog instead.
    pub fn reset(&mut self) {
        *self = Self::seeded();
        debug!("Catalog reset to seed set");
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    fn position(&self, id: AlbumId) -> Option<usize> {
        self.albums.iter().position(|album| album.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
