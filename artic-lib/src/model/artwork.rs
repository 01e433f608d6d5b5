//! Artwork record

use serde::Deserialize;
use serde::Serialize;

use super::ArtworkId;

/// One row of the artworks table.
///
/// Records are page-scoped: the table holds only the records of the page it
/// is showing and drops them on navigation. Display fields are optional
/// because the API returns `null` for unknown values and id-only fetches
/// leave them out entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Creates a record with only its id set.
    pub fn new(id: u64) -> Self {
        Self {
            id: ArtworkId::new(id),
            title: None,
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the place of origin.
    pub fn with_place_of_origin(mut self, place: impl Into<String>) -> Self {
        self.place_of_origin = Some(place.into());
        self
    }

    /// Sets the artist display line.
    pub fn with_artist_display(mut self, artist: impl Into<String>) -> Self {
        self.artist_display = Some(artist.into());
        self
    }

    /// Sets the inscriptions.
    pub fn with_inscriptions(mut self, inscriptions: impl Into<String>) -> Self {
        self.inscriptions = Some(inscriptions.into());
        self
    }

    /// Sets the start and end years.
    pub fn with_dates(mut self, start: i32, end: i32) -> Self {
        self.date_start = Some(start);
        self.date_end = Some(end);
        self
    }

    /// Returns the record id.
    pub fn id(&self) -> ArtworkId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": 27992,
            "title": "A Sunday on La Grande Jatte",
            "place_of_origin": "France",
            "artist_display": "Georges Seurat\nFrench, 1859-1891",
            "inscriptions": null,
            "date_start": 1884,
            "date_end": 1886
        }"#;

        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.id, ArtworkId::new(27992));
        assert_eq!(artwork.place_of_origin.as_deref(), Some("France"));
        assert_eq!(artwork.inscriptions, None);
        assert_eq!(artwork.date_start, Some(1884));
    }

    #[test]
    fn test_deserialize_id_only() {
        let artwork: Artwork = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(artwork, Artwork::new(7));
    }
}
