//! Requestable artwork fields

use std::fmt;

/// A field that can be requested from the artworks endpoint.
///
/// Providers only need to populate the fields they were asked for; anything
/// else may be left empty on the returned [`Artwork`](super::Artwork).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Title,
    PlaceOfOrigin,
    ArtistDisplay,
    Inscriptions,
    DateStart,
    DateEnd,
}

impl Field {
    /// Fields shown by the table.
    pub const DISPLAY: &'static [Field] = &[
        Field::Id,
        Field::Title,
        Field::PlaceOfOrigin,
        Field::ArtistDisplay,
        Field::Inscriptions,
        Field::DateStart,
        Field::DateEnd,
    ];

    /// Fields needed to select records without showing them.
    pub const ID_ONLY: &'static [Field] = &[Field::Id];

    /// Returns the wire name used in the `fields` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Title => "title",
            Field::PlaceOfOrigin => "place_of_origin",
            Field::ArtistDisplay => "artist_display",
            Field::Inscriptions => "inscriptions",
            Field::DateStart => "date_start",
            Field::DateEnd => "date_end",
        }
    }

    /// Joins fields into a comma-separated parameter value.
    pub fn join(fields: &[Field]) -> String {
        fields.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(",")
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_display_fields() {
        assert_eq!(
            Field::join(Field::DISPLAY),
            "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end"
        );
    }

    #[test]
    fn test_join_id_only() {
        assert_eq!(Field::join(Field::ID_ONLY), "id");
    }
}
