//! Page-independent selection set

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;

use super::SelectionCommand;
use super::SelectionDelta;
use crate::model::ArtworkId;

/// The single source of truth for which artworks are selected.
///
/// Membership does not depend on whether a record is currently loaded, and
/// nothing is pruned when the displayed page changes. Each operation is one
/// critical section, so readers never see a command half-applied.
///
/// This store is cheap to clone (uses `Arc` internally); clones share the
/// same set.
///
/// # Example
///
/// ```
/// use artic_lib::model::ArtworkId;
/// use artic_lib::selection::SelectionStore;
///
/// let store = SelectionStore::new();
/// store.set_selected(ArtworkId::new(7), true);
///
/// assert!(store.is_selected(ArtworkId::new(7)));
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    inner: Arc<RwLock<HashSet<ArtworkId>>>,
}

impl SelectionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a command atomically and returns what changed.
    pub fn apply(&self, command: SelectionCommand) -> SelectionDelta {
        let mut set = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        command.apply_to(&mut set)
    }

    /// Returns `true` if `id` is selected.
    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.read(|set| set.contains(&id))
    }

    /// Selects or deselects one id.
    pub fn set_selected(&self, id: ArtworkId, selected: bool) -> SelectionDelta {
        self.apply(SelectionCommand::SetSelected { id, selected })
    }

    /// Flips the selection of one id and returns its new state.
    pub fn toggle(&self, id: ArtworkId) -> bool {
        self.apply(SelectionCommand::Toggle(id)).added == 1
    }

    /// Makes the selection of the ids in `page_ids` match `selected_on_page`,
    /// leaving every other id untouched.
    pub fn reconcile_page(
        &self,
        page_ids: impl IntoIterator<Item = ArtworkId>,
        selected_on_page: impl IntoIterator<Item = ArtworkId>,
    ) -> SelectionDelta {
        let page_ids: Vec<ArtworkId> = page_ids.into_iter().collect();
        if page_ids.is_empty() {
            return SelectionDelta::default();
        }
        self.apply(SelectionCommand::ReconcilePage {
            page_ids,
            selected_on_page: selected_on_page.into_iter().collect(),
        })
    }

    /// Discards the current selection and installs `ids`.
    pub fn replace_all(&self, ids: impl IntoIterator<Item = ArtworkId>) -> SelectionDelta {
        self.apply(SelectionCommand::ReplaceAll(ids.into_iter().collect()))
    }

    /// Deselects everything.
    pub fn clear(&self) -> SelectionDelta {
        self.apply(SelectionCommand::Clear)
    }

    /// Returns the number of selected ids.
    pub fn len(&self) -> usize {
        self.read(HashSet::len)
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.read(HashSet::is_empty)
    }

    /// Returns a snapshot of the selected ids.
    pub fn all(&self) -> HashSet<ArtworkId> {
        self.read(|set| set.clone())
    }

    /// Returns a snapshot of the selected ids in ascending order.
    pub fn sorted(&self) -> Vec<ArtworkId> {
        let mut ids: Vec<_> = self.read(|set| set.iter().copied().collect());
        ids.sort_unstable();
        ids
    }

    /// Runs `f` against the set under one read lock.
    pub(crate) fn read<R>(&self, f: impl FnOnce(&HashSet<ArtworkId>) -> R) -> R {
        let set = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&set)
    }
}
