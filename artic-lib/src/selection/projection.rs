//! Projection of the selection set onto the displayed page

use super::SelectionStore;
use crate::model::Artwork;

/// Which records of the displayed page are selected.
///
/// Computed from the page and the store under a single read lock, and
/// never cached, so it always reflects the latest store contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelection<'a> {
    /// Selected records, in page order.
    pub selected: Vec<&'a Artwork>,
    /// `true` only when the page is non-empty and every record is selected.
    pub all_on_page_selected: bool,
    /// The select-all checkbox is disabled on an empty page.
    pub select_all_enabled: bool,
}

impl<'a> PageSelection<'a> {
    /// Projects `store` onto `records`.
    pub fn project(records: &'a [Artwork], store: &SelectionStore) -> Self {
        let selected: Vec<&Artwork> = store.read(|set| records.iter().filter(|r| set.contains(&r.id)).collect());
        let all_on_page_selected = !records.is_empty() && selected.len() == records.len();

        Self {
            selected,
            all_on_page_selected,
            select_all_enabled: !records.is_empty(),
        }
    }

    /// Returns `true` if some but not all records of the page are selected.
    pub fn is_partial(&self) -> bool {
        !self.selected.is_empty() && !self.all_on_page_selected
    }
}
