//! Page type for paginated fetch results.

use crate::model::Artwork;
use crate::model::ArtworkId;

/// One page of artworks with pagination information.
///
/// # Example
///
/// ```
/// use artic_lib::api::Page;
/// use artic_lib::model::Artwork;
///
/// let page = Page::new(vec![Artwork::new(1), Artwork::new(2)])
///     .with_total_count(40)
///     .with_next_url("https://api.artic.edu/api/v1/artworks?page=2");
///
/// assert_eq!(page.len(), 2);
/// assert!(page.has_next());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Page {
    records: Vec<Artwork>,
    /// Total number of records in the full ordered sequence.
    total_count: usize,
    /// `pagination.next_url` from the API, when more pages exist.
    next_url: Option<String>,
    /// Set by providers that know there is a next page without a URL for it.
    has_next: bool,
}

impl Page {
    /// Creates a new last page with the given records.
    pub fn new(records: Vec<Artwork>) -> Self {
        Self {
            records,
            total_count: 0,
            next_url: None,
            has_next: false,
        }
    }

    /// Sets the total record count.
    pub fn with_total_count(mut self, count: usize) -> Self {
        self.total_count = count;
        self
    }

    /// Sets the next page URL, which marks the page as having a successor.
    pub fn with_next_url(mut self, next_url: impl Into<String>) -> Self {
        self.next_url = Some(next_url.into());
        self.has_next = true;
        self
    }

    /// Marks whether a next page exists. Marking the page as last drops any
    /// next page URL.
    pub fn with_has_next(mut self, has_next: bool) -> Self {
        self.has_next = has_next;
        if !has_next {
            self.next_url = None;
        }
        self
    }

    /// Returns the records in this page.
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<Artwork> {
        self.records
    }

    /// Returns the ids of this page in order.
    pub fn ids(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.records.iter().map(Artwork::id)
    }

    /// Returns the server-reported total record count.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns the URL of the next page, if the API gave one.
    pub fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }

    /// Returns `true` if there are more pages after this one.
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
