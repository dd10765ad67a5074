//! Album catalog data model

use chrono::{DateTime, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Service-assigned album identifier (always > 0)
pub type AlbumId = u64;

/// Message reported when a draft lacks a title or an artist
pub const TITLE_AND_ARTIST_REQUIRED: &str = "Title and Artist are required";

/// Recording artist, embedded in every album
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    /// Serialized as `YYYY-MM-DD`; RFC 3339 datetimes are accepted on input
    #[serde(deserialize_with = "deserialize_birthdate")]
    pub birthdate: NaiveDate,
    #[serde(rename = "birthPlace")]
    pub birth_place: String,
}

/// Parse `YYYY-MM-DD` or an RFC 3339 datetime (date part kept)
pub fn parse_birthdate(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

fn deserialize_birthdate<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_birthdate(&raw).ok_or_else(|| de::Error::custom(format!("invalid birthdate: {}", raw)))
}

/// Album stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: Artist,
    pub year: i32,
    pub price: f64,
    /// Artwork reference, never interpreted
    pub image_url: String,
}

/// Caller-supplied album data for create and update
///
/// Carries no id. An `id` key in a request body is ignored during
/// deserialization and the service assigns (or keeps) the real one.
/// Omitted `year`, `price` and `image_url` default to zero values, since
/// update replaces the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<Artist>,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
}

impl AlbumDraft {
    /// Build a draft from a decoded request body
    ///
    /// A non-object body or an `artist` that is not a complete artist
    /// object is treated as absent, so the usual presence check reports
    /// it (after any not-found check on update). Type errors in the
    /// other fields are reported as invalid album data.
    pub fn from_json(body: Value) -> Result<Self> {
        let Value::Object(mut fields) = body else {
            return Ok(Self::default());
        };

        let artist = fields
            .remove("artist")
            .and_then(|raw| serde_json::from_value::<Artist>(raw).ok());

        let draft: AlbumDraft = serde_json::from_value(Value::Object(fields))
            .map_err(|e| Error::InvalidInput(format!("Invalid album data: {}", e)))?;

        Ok(Self { artist, ..draft })
    }

    /// Check that title and artist are present
    pub fn validate(&self) -> Result<()> {
        let has_title = self.title.as_deref().is_some_and(is_present);

        if !has_title || self.artist.is_none() {
            return Err(title_and_artist_required());
        }
        Ok(())
    }

    /// Validate and combine with `id` into a full album
    pub fn into_album(self, id: AlbumId) -> Result<Album> {
        self.validate()?;

        let (Some(title), Some(artist)) = (self.title, self.artist) else {
            return Err(title_and_artist_required());
        };
        Ok(Album {
            id,
            title,
            artist,
            year: self.year,
            price: self.price,
            image_url: self.image_url,
        })
    }
}

fn title_and_artist_required() -> Error {
    Error::InvalidInput(TITLE_AND_ARTIST_REQUIRED.to_string())
}

fn is_present(text: &str) -> bool {
    !text.trim().is_empty()
}

impl From<Album> for AlbumDraft {
    fn from(album: Album) -> Self {
        Self {
            title: Some(album.title),
            artist: Some(album.artist),
            year: album.year,
            price: album.price,
            image_url: album.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn artist() -> Artist {
        Artist {
            name: "Test Artist".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            birth_place: "Test City".to_string(),
        }
    }

    #[test]
    fn test_album_serializes_wire_field_names() {
        let album = Album {
            id: 3,
            title: "Scale It Up".to_string(),
            artist: artist(),
            year: 2022,
            price: 13.99,
            image_url: "u".to_string(),
        };

        let value = serde_json::to_value(&album).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["image_url"], "u");
        assert_eq!(value["artist"]["birthPlace"], "Test City");
        assert_eq!(value["artist"]["birthdate"], "1990-01-01");
        assert!(value["artist"].get("birth_place").is_none());
    }

    #[test]
    fn test_draft_ignores_supplied_id() {
        let draft: AlbumDraft = serde_json::from_value(json!({
            "id": 42,
            "title": "T",
            "artist": {"name": "A", "birthdate": "1990-01-01", "birthPlace": "X"},
            "year": 2024,
            "price": 1.0,
            "image_url": "u"
        }))
        .unwrap();

        let album = draft.into_album(7).unwrap();
        assert_eq!(album.id, 7);
        assert_eq!(album.title, "T");
    }

    #[test]
    fn test_draft_missing_fields_default() {
        let draft: AlbumDraft = serde_json::from_value(json!({"title": "T"})).unwrap();
        assert_eq!(draft.year, 0);
        assert_eq!(draft.price, 0.0);
        assert_eq!(draft.image_url, "");
        assert!(draft.artist.is_none());
    }

    #[test]
    fn test_validate_requires_title() {
        let draft = AlbumDraft {
            artist: Some(artist()),
            ..Default::default()
        };
        let err = draft.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(ref m) if m == TITLE_AND_ARTIST_REQUIRED));
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let draft = AlbumDraft {
            title: Some("   ".to_string()),
            artist: Some(artist()),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_validate_requires_artist() {
        let draft = AlbumDraft {
            title: Some("T".to_string()),
            ..Default::default()
        };
        let err = draft.into_album(1).unwrap_err();
        assert_eq!(err.message(), TITLE_AND_ARTIST_REQUIRED);
    }

    #[test]
    fn test_birthdate_accepts_rfc3339_datetime() {
        let artist: Artist = serde_json::from_value(json!({
            "name": "A",
            "birthdate": "1990-05-15T00:00:00.000Z",
            "birthPlace": "X"
        }))
        .unwrap();
        assert_eq!(artist.birthdate, NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
        assert_eq!(serde_json::to_value(&artist).unwrap()["birthdate"], "1990-05-15");
    }

    #[test]
    fn test_parse_birthdate_rejects_garbage() {
        assert_eq!(parse_birthdate("not a date"), None);
        assert_eq!(parse_birthdate("1990-13-01"), None);
    }

    #[test]
    fn test_from_json_incomplete_artist_counts_as_missing() {
        let draft = AlbumDraft::from_json(json!({"title": "T", "artist": {"name": "A"}})).unwrap();
        assert_eq!(draft.title.as_deref(), Some("T"));
        assert!(draft.artist.is_none());

        let err = draft.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(ref m) if m == TITLE_AND_ARTIST_REQUIRED));
    }

    #[test]
    fn test_from_json_non_object_counts_as_missing() {
        let draft = AlbumDraft::from_json(json!([1, 2])).unwrap();
        assert_eq!(draft, AlbumDraft::default());
        assert_eq!(draft.into_album(7).unwrap_err().message(), TITLE_AND_ARTIST_REQUIRED);
    }

    #[test]
    fn test_from_json_bad_field_type_is_distinct_error() {
        let err = AlbumDraft::from_json(json!({
            "title": "T",
            "artist": {"name": "A", "birthdate": "1990-01-01", "birthPlace": "X"},
            "year": "twenty"
        }))
        .unwrap_err();
        assert!(err.message().starts_with("Invalid album data"));
    }

    #[test]
    fn test_from_json_complete_body() {
        let draft = AlbumDraft::from_json(json!({
            "id": 9,
            "title": "T",
            "artist": {"name": "A", "birthdate": "1990-01-01", "birthPlace": "X"},
            "year": 2024,
            "price": 1.5,
            "image_url": "u"
        }))
        .unwrap();
        assert_eq!(draft.artist.as_ref().unwrap().name, "A");
        assert_eq!(draft.year, 2024);
        assert_eq!(draft.into_album(7).unwrap().id, 7);
    }
}
