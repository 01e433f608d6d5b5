//! "Select the first N records" across pages.
//!
//! The walk starts at page 1 and fetches id-only pages one at a time until
//! the target is reached, the source runs out, a fetch fails, or the walk is
//! cancelled:
//!
//! ```text
//! Idle -> Fetching { page: k } -> Fetching { page: k + 1 } | Done | Interrupted | Cancelled
//! ```
//!
//! Whatever was collected is installed with
//! [`SelectionStore::replace_all`] unless the walk was cancelled.

use std::collections::HashSet;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::SelectionStore;
use crate::api::PageProvider;
use crate::error::FetchError;
use crate::error::InputError;
use crate::model::ArtworkId;
use crate::model::Field;

/// Records per request when the caller does not choose one.
pub const DEFAULT_BULK_PAGE_SIZE: usize = 100;

/// Validates a requested selection count.
///
/// Missing and non-positive counts are rejected.
pub fn validate_target(n: Option<i64>) -> Result<usize, InputError> {
    match n {
        None => Err(InputError::MissingTarget),
        Some(n) if n <= 0 => Err(InputError::NonPositiveTarget(n)),
        Some(n) => Ok(usize::try_from(n).unwrap_or(usize::MAX)),
    }
}

// =============================================================================
// State
// =============================================================================

/// Where a [`BulkWalk`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkState {
    /// No page requested yet.
    Idle,
    /// `page` is the next page to request; `collected` ids are held so far.
    Fetching { page: usize, collected: usize },
    /// Finished normally. `exhausted` is set when the source ran out before
    /// the target was reached.
    Done { exhausted: bool },
    /// A fetch failed; the ids collected before it are kept.
    Interrupted,
    /// The walk was cancelled; nothing will be installed.
    Cancelled,
}

impl BulkState {
    /// Returns `true` once the walk will make no further requests.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done { .. } | Self::Interrupted | Self::Cancelled)
    }
}

/// How a bulk selection ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkStatus {
    /// Exactly the requested number of ids was selected.
    Complete,
    /// The source had fewer records than requested; all were selected.
    Exhausted,
    /// A fetch failed part-way; the ids collected before it were selected.
    Interrupted,
    /// The walk was superseded or torn down; the selection was not touched.
    Cancelled,
}

/// Result of a bulk selection.
#[derive(Debug)]
pub struct BulkOutcome {
    pub status: BulkStatus,
    /// Number of ids installed (zero when cancelled).
    pub selected: usize,
    /// Number of pages fetched successfully.
    pub pages_fetched: usize,
    /// The fetch failure that interrupted the walk, if any.
    pub error: Option<FetchError>,
}

impl BulkOutcome {
    /// Returns `true` if the selection set was replaced.
    pub fn installed(&self) -> bool {
        self.status != BulkStatus::Cancelled
    }
}

// =============================================================================
// Walk
// =============================================================================

/// One sequential walk over the source.
///
/// A walk is single-use: drive it with [`step`](Self::step) until its state
/// is terminal, then [`finish`](Self::finish) it. Only one fetch is ever
/// outstanding.
pub struct BulkWalk<'a, P: PageProvider + ?Sized> {
    provider: &'a P,
    target: usize,
    page_size: usize,
    state: BulkState,
    ids: Vec<ArtworkId>,
    pages_fetched: usize,
    error: Option<FetchError>,
}

impl<'a, P: PageProvider + ?Sized> BulkWalk<'a, P> {
    /// Creates a walk collecting `target` ids, `page_size` per request.
    pub fn new(provider: &'a P, target: usize, page_size: usize) -> Self {
        Self {
            provider,
            target,
            page_size: page_size.max(1),
            state: BulkState::Idle,
            ids: Vec::with_capacity(target.min(page_size.max(1).saturating_mul(4))),
            pages_fetched: 0,
            error: None,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> BulkState {
        self.state
    }

    /// Returns the ids collected so far, in source order.
    pub fn collected(&self) -> &[ArtworkId] {
        &self.ids
    }

    /// Fetches the next page and advances the state.
    ///
    /// Does nothing once the state is terminal. If `cancel` fires while the
    /// fetch is pending, the fetch is dropped and the walk is cancelled.
    pub async fn step(&mut self, cancel: &CancellationToken) -> BulkState {
        let page = match self.state {
            BulkState::Idle => 1,
            BulkState::Fetching { page, .. } => page,
            terminal => return terminal,
        };
        if cancel.is_cancelled() {
            self.state = BulkState::Cancelled;
            return self.state;
        }

        let provider = self.provider;
        let page_size = self.page_size;
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            result = provider.fetch_page(page, page_size, Field::ID_ONLY) => Some(result),
        };

        self.state = match result {
            None => {
                log::debug!("bulk selection cancelled while fetching page {}", page);
                BulkState::Cancelled
            }
            Some(Err(e)) => {
                log::warn!(
                    "bulk selection interrupted at page {} with {} ids collected: {}",
                    page,
                    self.ids.len(),
                    e
                );
                self.error = Some(e);
                BulkState::Interrupted
            }
            Some(Ok(fetched)) => {
                self.pages_fetched += 1;
                let remaining = self.target - self.ids.len();
                self.ids.extend(fetched.ids().take(remaining));
                log::debug!(
                    "bulk selection page {}: {} records, {}/{} collected",
                    page,
                    fetched.len(),
                    self.ids.len(),
                    self.target
                );

                if self.ids.len() >= self.target {
                    BulkState::Done { exhausted: false }
                } else if !fetched.has_next() || fetched.is_empty() {
                    BulkState::Done { exhausted: true }
                } else {
                    BulkState::Fetching {
                        page: page + 1,
                        collected: self.ids.len(),
                    }
                }
            }
        };
        self.state
    }

    /// Installs the collected ids into `store` and reports the outcome.
    ///
    /// A cancelled walk leaves `store` untouched. Calling this before the
    /// walk is terminal installs the partial result as if interrupted.
    pub fn finish(self, store: &SelectionStore) -> BulkOutcome {
        let status = match self.state {
            BulkState::Done { exhausted: false } => BulkStatus::Complete,
            BulkState::Done { exhausted: true } => BulkStatus::Exhausted,
            BulkState::Cancelled => BulkStatus::Cancelled,
            BulkState::Interrupted | BulkState::Idle | BulkState::Fetching { .. } => BulkStatus::Interrupted,
        };

        let selected = if status == BulkStatus::Cancelled {
            0
        } else {
            let ids: HashSet<ArtworkId> = self.ids.into_iter().collect();
            let count = ids.len();
            let delta = store.replace_all(ids);
            log::debug!("bulk selection replaced set: +{} -{}", delta.added, delta.removed);
            count
        };

        BulkOutcome {
            status,
            selected,
            pages_fetched: self.pages_fetched,
            error: self.error,
        }
    }
}

// =============================================================================
// Selector
// =============================================================================

/// Selects the first N records of a provider into a [`SelectionStore`].
///
/// Cheap to clone; clones share the provider and the store.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use artic_lib::api::InMemoryProvider;
/// use artic_lib::selection::{BulkSelector, SelectionStore};
///
/// let store = SelectionStore::new();
/// let selector = BulkSelector::new(Arc::new(InMemoryProvider::with_ids(1..=250)), store.clone());
///
/// let outcome = selector.select_first(Some(10)).await?;
/// assert_eq!(store.len(), 10);
/// ```
pub struct BulkSelector<P: PageProvider + ?Sized> {
    provider: Arc<P>,
    store: SelectionStore,
    page_size: usize,
}

impl<P: PageProvider + ?Sized> Clone for BulkSelector<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            store: self.store.clone(),
            page_size: self.page_size,
        }
    }
}

impl<P: PageProvider + ?Sized> BulkSelector<P> {
    /// Creates a selector fetching [`DEFAULT_BULK_PAGE_SIZE`] ids per request.
    pub fn new(provider: Arc<P>, store: SelectionStore) -> Self {
        Self {
            provider,
            store,
            page_size: DEFAULT_BULK_PAGE_SIZE,
        }
    }

    /// Sets the number of ids fetched per request. Zero is raised to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Returns the number of ids fetched per request.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replaces the selection with the first `n` records of the source.
    ///
    /// Invalid `n` is rejected before anything is fetched or changed.
    pub async fn select_first(&self, n: Option<i64>) -> Result<BulkOutcome, InputError> {
        self.select_first_with_cancel(n, CancellationToken::new()).await
    }

    /// Like [`select_first`](Self::select_first), aborting when `cancel` fires.
    pub async fn select_first_with_cancel(
        &self,
        n: Option<i64>,
        cancel: CancellationToken,
    ) -> Result<BulkOutcome, InputError> {
        let target = validate_target(n)?;
        Ok(self.run(target, cancel).await)
    }

    /// Runs a walk for an already validated target.
    pub(crate) async fn run(&self, target: usize, cancel: CancellationToken) -> BulkOutcome {
        let mut walk = BulkWalk::new(&*self.provider, target, self.page_size);
        while !walk.state().is_terminal() {
            walk.step(&cancel).await;
        }

        let outcome = walk.finish(&self.store);
        match outcome.status {
            BulkStatus::Complete | BulkStatus::Exhausted => log::info!(
                "bulk selection {:?}: {} of {} requested ids selected over {} pages",
                outcome.status,
                outcome.selected,
                target,
                outcome.pages_fetched
            ),
            BulkStatus::Interrupted => log::info!(
                "bulk selection kept {} ids after interruption",
                outcome.selected
            ),
            BulkStatus::Cancelled => log::info!("bulk selection cancelled"),
        }
        outcome
    }
}
