//! Paged data provider abstraction.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::PoisonError;

use async_trait::async_trait;

use super::Page;
use crate::error::FetchError;
use crate::model::Artwork;
use crate::model::Field;

/// Source of pages of artworks.
///
/// Pages are numbered from 1. Implementations should bound each call with
/// their own timeout and report it as [`FetchError::Timeout`]; callers treat
/// every error the same way and never retry on their own.
///
/// # Example
///
/// ```ignore
/// use artic_lib::api::PageProvider;
/// use artic_lib::model::Field;
///
/// let page = provider.fetch_page(1, 12, Field::DISPLAY).await?;
/// for artwork in page.records() {
///     println!("{}", artwork.id);
/// }
/// ```
#[async_trait]
pub trait PageProvider: Send + Sync {
    /// Fetches page `page` (1-based) holding up to `page_size` records,
    /// restricted to `fields`.
    async fn fetch_page(&self, page: usize, page_size: usize, fields: &[Field]) -> Result<Page, FetchError>;
}

/// A record of one call made against an [`InMemoryProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCall {
    pub page: usize,
    pub page_size: usize,
    pub fields: Vec<Field>,
}

/// A provider that serves a fixed, ordered list of artworks.
///
/// Useful for testing and demos. Every call is recorded, and specific page
/// numbers can be made to fail.
///
/// # Example
///
/// ```
/// use artic_lib::api::InMemoryProvider;
///
/// let provider = InMemoryProvider::with_ids(1..=250).fail_on_page(3);
/// assert_eq!(provider.len(), 250);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    records: Vec<Artwork>,
    failing_pages: HashSet<usize>,
    calls: Mutex<Vec<FetchCall>>,
}

impl InMemoryProvider {
    /// Creates a provider serving the given records in order.
    pub fn new(records: Vec<Artwork>) -> Self {
        Self {
            records,
            failing_pages: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Creates a provider whose records carry only the given ids.
    pub fn with_ids(ids: impl IntoIterator<Item = u64>) -> Self {
        Self::new(ids.into_iter().map(Artwork::new).collect())
    }

    /// Makes every fetch of `page` fail with an HTTP 503.
    pub fn fail_on_page(mut self, page: usize) -> Self {
        self.failing_pages.insert(page);
        self
    }

    /// Returns the number of records served.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the provider serves no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns every fetch made so far, in call order.
    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of fetches made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn project(record: &Artwork, fields: &[Field]) -> Artwork {
        let mut out = Artwork::new(record.id.get());
        for field in fields {
            match field {
                Field::Id => {}
                Field::Title => out.title = record.title.clone(),
                Field::PlaceOfOrigin => out.place_of_origin = record.place_of_origin.clone(),
                Field::ArtistDisplay => out.artist_display = record.artist_display.clone(),
                Field::Inscriptions => out.inscriptions = record.inscriptions.clone(),
                Field::DateStart => out.date_start = record.date_start,
                Field::DateEnd => out.date_end = record.date_end,
            }
        }
        out
    }
}

#[async_trait]
impl PageProvider for InMemoryProvider {
    async fn fetch_page(&self, page: usize, page_size: usize, fields: &[Field]) -> Result<Page, FetchError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(FetchCall {
                page,
                page_size,
                fields: fields.to_vec(),
            });

        if self.failing_pages.contains(&page) {
            return Err(FetchError::http(503, format!("page {} unavailable", page)));
        }
        if page == 0 || page_size == 0 {
            return Err(FetchError::http(400, "page and limit must be positive"));
        }

        let start = (page - 1).saturating_mul(page_size).min(self.records.len());
        let end = start.saturating_add(page_size).min(self.records.len());
        let records = self.records[start..end]
            .iter()
            .map(|r| Self::project(r, fields))
            .collect();

        Ok(Page::new(records)
            .with_total_count(self.records.len())
            .with_has_next(end < self.records.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArtworkId;

    #[tokio::test]
    async fn test_slices_pages_in_order() {
        let provider = InMemoryProvider::with_ids(1..=25);

        let first = provider.fetch_page(1, 10, Field::ID_ONLY).await.unwrap();
        let last = provider.fetch_page(3, 10, Field::ID_ONLY).await.unwrap();

        assert_eq!(first.ids().collect::<Vec<_>>(), (1..=10).map(ArtworkId::new).collect::<Vec<_>>());
        assert!(first.has_next());
        assert_eq!(last.len(), 5);
        assert!(!last.has_next());
        assert_eq!(last.total_count(), 25);
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty() {
        let provider = InMemoryProvider::with_ids(1..=5);
        let page = provider.fetch_page(4, 10, Field::ID_ONLY).await.unwrap();
        assert!(page.is_empty());
        assert!(!page.has_next());
    }

    #[tokio::test]
    async fn test_projects_requested_fields() {
        let provider = InMemoryProvider::new(vec![Artwork::new(1).with_title("Nighthawks").with_dates(1942, 1942)]);

        let ids = provider.fetch_page(1, 10, Field::ID_ONLY).await.unwrap();
        let full = provider.fetch_page(1, 10, Field::DISPLAY).await.unwrap();

        assert_eq!(ids.records()[0].title, None);
        assert_eq!(full.records()[0].title.as_deref(), Some("Nighthawks"));
        assert_eq!(full.records()[0].date_end, Some(1942));
    }

    #[tokio::test]
    async fn test_failing_page_is_recorded() {
        let provider = InMemoryProvider::with_ids(1..=5).fail_on_page(1);
        let err = provider.fetch_page(1, 10, Field::ID_ONLY).await.unwrap_err();

        assert_eq!(err.status_code(), Some(503));
        assert_eq!(
            provider.calls(),
            vec![FetchCall {
                page: 1,
                page_size: 10,
                fields: vec![Field::Id],
            }]
        );
    }
}
