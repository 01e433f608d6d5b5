//! Paginated artwork table with cross-page selection.
//!
//! [`TableView`] owns the displayed page and the selection set, and turns
//! rendering-surface events into store commands. The surface reads
//! [`TableView::current_page_records`] and [`TableView::projection`] to draw
//! rows and checkboxes.

mod window;

pub use window::PageWindow;

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::api::PageProvider;
use crate::config::TableConfig;
use crate::error::InputError;
use crate::model::Artwork;
use crate::model::ArtworkId;
use crate::selection::BulkOutcome;
use crate::selection::BulkSelector;
use crate::selection::PageSelection;
use crate::selection::SelectionDelta;
use crate::selection::SelectionStore;
use crate::selection::validate_target;

/// View controller for one table.
///
/// The selection set lives as long as the view. Dropping the view cancels
/// any bulk selection still running.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use artic_lib::{ArticClient, TableConfig, table::TableView};
///
/// let client = Arc::new(ArticClient::builder().build()?);
/// let mut view = TableView::new(client, TableConfig::default());
///
/// view.load().await;
/// view.on_select_all_on_page_toggled(true);
/// view.on_page_navigated(12, 12).await?;
///
/// println!("{}", view.status_line());
/// ```
pub struct TableView<P: PageProvider + ?Sized> {
    provider: Arc<P>,
    config: TableConfig,
    store: SelectionStore,
    window: PageWindow,
    records: Vec<Artwork>,
    total_count: usize,
    loading: bool,
    bulk_cancel: Mutex<Option<CancellationToken>>,
}

impl<P: PageProvider + ?Sized> TableView<P> {
    /// Creates a view on the first page with an empty selection.
    ///
    /// Nothing is fetched until [`load`](Self::load) is called.
    pub fn new(provider: Arc<P>, config: TableConfig) -> Self {
        Self::with_store(provider, config, SelectionStore::new())
    }

    /// Creates a view that uses an existing selection store.
    pub fn with_store(provider: Arc<P>, config: TableConfig, store: SelectionStore) -> Self {
        let page_size = NonZeroUsize::new(config.page_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            provider,
            config,
            store,
            window: PageWindow::first(page_size),
            records: Vec::new(),
            total_count: 0,
            loading: false,
            bulk_cancel: Mutex::new(None),
        }
    }

    // =========================================================================
    // Paging
    // =========================================================================

    /// Fetches the current window and replaces the displayed page.
    ///
    /// A failed fetch shows an empty page with a total of zero; the view
    /// stays usable and navigating again retries.
    pub async fn load(&mut self) {
        let loading = LoadingGuard::set(&mut self.loading);
        let page_number = self.window.page_number();
        let result = self
            .provider
            .fetch_page(page_number, self.window.page_size(), &self.config.display_fields)
            .await;

        match result {
            Ok(page) => {
                log::debug!(
                    "loaded page {} ({} records of {})",
                    page_number,
                    page.len(),
                    page.total_count()
                );
                self.total_count = page.total_count();
                self.records = page.into_records();
            }
            Err(e) => {
                log::error!("failed to fetch page {}: {}", page_number, e);
                self.records.clear();
                self.total_count = 0;
            }
        }
        drop(loading);
    }

    /// Refetches the current window.
    pub async fn refresh(&mut self) {
        self.load().await;
    }

    /// Moves to a new window and fetches it.
    ///
    /// The selection set is not touched.
    pub async fn on_page_navigated(&mut self, offset: usize, page_size: usize) -> Result<(), InputError> {
        self.window = PageWindow::new(offset, page_size)?;
        self.load().await;
        Ok(())
    }

    /// Returns the displayed window.
    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Returns the records of the displayed page.
    pub fn current_page_records(&self) -> &[Artwork] {
        &self.records
    }

    /// Returns the ids of the displayed page in order.
    pub fn current_page_ids(&self) -> Vec<ArtworkId> {
        self.records.iter().map(Artwork::id).collect()
    }

    /// Returns the total reported by the latest fetch.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns `true` while a page fetch is in progress.
    ///
    /// [`load`](Self::load) holds the view mutably, so this reads `false`
    /// from any caller outside the fetch. The flag is cleared even when the
    /// load future is dropped mid-fetch.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the page sizes the paginator offers.
    pub fn page_size_options(&self) -> &[usize] {
        &self.config.page_size_options
    }

    /// Returns the count to pre-fill in the bulk selection input.
    pub fn default_bulk_target(&self) -> i64 {
        self.config.default_bulk_target
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Returns the selection store shared by this view.
    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    /// Projects the selection onto the displayed page.
    pub fn projection(&self) -> PageSelection<'_> {
        PageSelection::project(&self.records, &self.store)
    }

    /// Returns the selected records of the displayed page, in page order.
    pub fn projected_selection(&self) -> Vec<&Artwork> {
        self.projection().selected
    }

    /// Returns `true` if the page is non-empty and every record is selected.
    pub fn all_on_page_selected(&self) -> bool {
        self.projection().all_on_page_selected
    }

    /// Applies the row selection the surface reports for the displayed page.
    ///
    /// `selected_on_page` is the full set of checked rows after the event.
    /// Rows of this page missing from it are deselected; other pages keep
    /// their selection.
    pub fn on_row_selection_changed(&self, selected_on_page: &[Artwork]) -> SelectionDelta {
        let delta = self
            .store
            .reconcile_page(self.current_page_ids(), selected_on_page.iter().map(Artwork::id));
        log::debug!("row selection changed: +{} -{}", delta.added, delta.removed);
        delta
    }

    /// Selects or deselects every record of the displayed page.
    pub fn on_select_all_on_page_toggled(&self, checked: bool) -> SelectionDelta {
        let page_ids = self.current_page_ids();
        let selected_on_page = if checked { page_ids.clone() } else { Vec::new() };
        let delta = self.store.reconcile_page(page_ids, selected_on_page);
        log::debug!(
            "select all on page {}: +{} -{}",
            if checked { "checked" } else { "unchecked" },
            delta.added,
            delta.removed
        );
        delta
    }

    /// Flips the selection of one id and returns its new state.
    pub fn toggle_row(&self, id: ArtworkId) -> bool {
        self.store.toggle(id)
    }

    /// Returns the number of selected ids across all pages.
    pub fn selected_count(&self) -> usize {
        self.store.len()
    }

    /// Footer text, e.g. `"10 of 250 row(s) selected."`.
    pub fn status_line(&self) -> String {
        format!("{} of {} row(s) selected.", self.selected_count(), self.total_count)
    }

    // =========================================================================
    // Bulk selection
    // =========================================================================

    /// Returns a bulk selector writing into this view's store.
    pub fn bulk_selector(&self) -> BulkSelector<P> {
        BulkSelector::new(Arc::clone(&self.provider), self.store.clone()).with_page_size(self.config.bulk_page_size)
    }

    /// Replaces the selection with the first `n` records of the source.
    ///
    /// Invalid `n` is rejected without fetching or changing anything. A walk
    /// already in flight is cancelled first.
    pub async fn request_bulk_select(&self, n: Option<i64>) -> Result<BulkOutcome, InputError> {
        let target = validate_target(n)?;
        let cancel = self.begin_bulk();
        Ok(self.bulk_selector().run(target, cancel).await)
    }

    /// Cancels the bulk selection in flight, if any.
    pub fn cancel_bulk_select(&self) {
        if let Some(token) = self.bulk_cancel.lock().unwrap_or_else(PoisonError::into_inner).take() {
            token.cancel();
        }
    }

    fn begin_bulk(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let previous = self
            .bulk_cancel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(token.clone());
        if let Some(previous) = previous {
            previous.cancel();
        }
        token
    }
}

impl<P: PageProvider + ?Sized + 'static> TableView<P> {
    /// Starts a bulk selection on a tokio task so paging can continue.
    ///
    /// `n` is validated before the task is spawned. A walk already in flight
    /// is cancelled.
    pub fn spawn_bulk_select(&self, n: Option<i64>) -> Result<JoinHandle<BulkOutcome>, InputError> {
        let target = validate_target(n)?;
        let cancel = self.begin_bulk();
        let selector = self.bulk_selector();
        Ok(tokio::spawn(async move { selector.run(target, cancel).await }))
    }
}

/// Clears the loading flag when a fetch ends or is abandoned.
struct LoadingGuard<'a>(&'a mut bool);

impl<'a> LoadingGuard<'a> {
    fn set(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

impl<P: PageProvider + ?Sized> Drop for TableView<P> {
    fn drop(&mut self) {
        self.cancel_bulk_select();
    }
}

impl<P: PageProvider + ?Sized> std::fmt::Debug for TableView<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableView")
            .field("window", &self.window)
            .field("records", &self.records.len())
            .field("total_count", &self.total_count)
            .field("selected", &self.store.len())
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::InMemoryProvider;
    use crate::api::Page;
    use crate::error::FetchError;
    use crate::model::Field;

    struct StalledProvider;

    #[async_trait::async_trait]
    impl PageProvider for StalledProvider {
        async fn fetch_page(&self, _page: usize, _page_size: usize, _fields: &[Field]) -> Result<Page, FetchError> {
            std::future::pending().await
        }
    }

    fn view(provider: InMemoryProvider) -> TableView<InMemoryProvider> {
        TableView::new(Arc::new(provider), TableConfig::default())
    }

    #[tokio::test]
    async fn test_load_first_page() {
        let mut view = view(InMemoryProvider::with_ids(1..=30));
        view.load().await;

        assert_eq!(view.current_page_records().len(), 12);
        assert_eq!(view.total_count(), 30);
        assert!(!view.is_loading());
        assert_eq!(view.window().page_number(), 1);
    }

    #[tokio::test]
    async fn test_abandoned_load_clears_loading_flag() {
        let mut view = TableView::new(Arc::new(StalledProvider), TableConfig::default());

        tokio::select! {
            biased;
            _ = view.load() => panic!("stalled fetch completed"),
            _ = std::future::ready(()) => {}
        }

        assert!(!view.is_loading());
        assert!(view.current_page_records().is_empty());
    }

    #[tokio::test]
    async fn test_zero_page_size_rejected_without_fetch() {
        let provider = Arc::new(InMemoryProvider::with_ids(1..=30));
        let mut view = TableView::new(Arc::clone(&provider), TableConfig::default());

        let err = view.on_page_navigated(0, 0).await.unwrap_err();

        assert_eq!(err, InputError::ZeroPageSize);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_toggle_row() {
        let mut view = view(InMemoryProvider::with_ids(1..=30));
        view.load().await;

        assert!(view.toggle_row(ArtworkId::new(3)));
        assert_eq!(view.projected_selection().len(), 1);
        assert!(!view.toggle_row(ArtworkId::new(3)));
        assert_eq!(view.selected_count(), 0);
    }

    #[tokio::test]
    async fn test_status_line() {
        let mut view = view(InMemoryProvider::with_ids(1..=250));
        view.load().await;
        view.on_select_all_on_page_toggled(true);

        assert_eq!(view.status_line(), "12 of 250 row(s) selected.");
    }

    #[tokio::test]
    async fn test_select_all_on_empty_page_is_noop() {
        let view = view(InMemoryProvider::with_ids(1..=30));
        view.store().set_selected(ArtworkId::new(20), true);

        let delta = view.on_select_all_on_page_toggled(false);

        assert!(delta.is_empty());
        assert!(!view.all_on_page_selected());
        assert_eq!(view.selected_count(), 1);
    }

    #[tokio::test]
    async fn test_new_bulk_request_cancels_previous_token() {
        let view = view(InMemoryProvider::with_ids(1..=30));
        let first = view.begin_bulk();
        let second = view.begin_bulk();

        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());

        drop(view);
        assert!(second.is_cancelled());
    }
}
