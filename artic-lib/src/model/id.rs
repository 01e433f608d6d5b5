//! Artwork identifier

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Stable identifier of an artwork.
///
/// The same artwork carries the same id on every page and every fetch, which
/// is what lets selection outlive the page a record was loaded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(u64);

impl ArtworkId {
    /// Creates an id from its raw value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ArtworkId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
