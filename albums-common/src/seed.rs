//! Fixed seed set loaded at startup and on reset

use chrono::NaiveDate;

use crate::models::{Album, AlbumId, Artist};

/// First id handed out after seeding (seed ids are 1-6)
pub const FIRST_ALLOCATED_ID: AlbumId = 7;

fn album(
    id: AlbumId,
    title: &str,
    (name, (y, m, d), birth_place): (&str, (i32, u32, u32), &str),
    year: i32,
    price: f64,
    image_url: &str,
) -> Album {
    Album {
        id,
        title: title.to_string(),
        artist: Artist {
            name: name.to_string(),
            birthdate: NaiveDate::from_ymd_opt(y, m, d).expect("seed birthdate must be a valid date"),
            birth_place: birth_place.to_string(),
        },
        year,
        price,
        image_url: image_url.to_string(),
    }
}

/// The six seed albums, in catalog order
pub fn seed_albums() -> Vec<Album> {
    vec![
        album(
            1,
            "You, Me and an App Id",
            ("Daprize", (1990, 5, 15), "Seattle, WA"),
            2020,
            10.99,
            "https://aka.ms/albums-daprlogo",
        ),
        album(
            2,
            "Seven Revision Army",
            ("The Blue-Green Stripes", (1985, 3, 20), "Detroit, MI"),
            2021,
            13.99,
            "https://aka.ms/albums-containerappslogo",
        ),
        album(
            3,
            "Scale It Up",
            ("KEDA Club", (1992, 8, 10), "Austin, TX"),
            2022,
            13.99,
            "https://aka.ms/albums-kedalogo",
        ),
        album(
            4,
            "Lost in Translation",
            ("MegaDNS", (1988, 11, 25), "Portland, OR"),
            2023,
            12.99,
            "https://aka.ms/albums-envoylogo",
        ),
        album(
            5,
            "Lock Down Your Love",
            ("V is for VNET", (1995, 2, 14), "San Francisco, CA"),
            2024,
            12.99,
            "https://aka.ms/albums-vnetlogo",
        ),
        album(
            6,
            "Sweet Container O' Mine",
            ("Guns N Probeses", (1987, 7, 6), "Los Angeles, CA"),
            2025,
            14.99,
            "https://aka.ms/albums-containerappslogo",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_one_through_six() {
        let ids: Vec<AlbumId> = seed_albums().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert!(ids.iter().all(|id| *id < FIRST_ALLOCATED_ID));
    }

    #[test]
    fn test_seed_years_are_distinct() {
        let years: Vec<i32> = seed_albums().iter().map(|a| a.year).collect();
        assert_eq!(years, vec![2020, 2021, 2022, 2023, 2024, 2025]);
    }

    #[test]
    fn test_seed_first_artist() {
        let first = &seed_albums()[0];
        assert_eq!(first.artist.name, "Daprize");
        assert_eq!(first.artist.birthdate, NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
        assert_eq!(first.artist.birth_place, "Seattle, WA");
    }
}
