//! Selection commands
//!
//! Every change to the selection set is expressed as a [`SelectionCommand`]
//! so that UI events ("row toggled", "select all on page") stay decoupled
//! from how the set mutates.

use std::collections::HashSet;

use crate::model::ArtworkId;

/// A single mutation of the selection set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionCommand {
    /// Adds or removes one id.
    SetSelected { id: ArtworkId, selected: bool },
    /// Flips the selection of one id.
    Toggle(ArtworkId),
    /// Makes the selection of the ids on one page match `selected_on_page`.
    ///
    /// Ids in `page_ids` are added if they appear in `selected_on_page` and
    /// removed otherwise. Ids outside `page_ids` are left alone, including
    /// any in `selected_on_page` that are not on the page.
    ReconcilePage {
        page_ids: Vec<ArtworkId>,
        selected_on_page: HashSet<ArtworkId>,
    },
    /// Discards the current set and installs `ids`.
    ReplaceAll(HashSet<ArtworkId>),
    /// Empties the set.
    Clear,
}

impl SelectionCommand {
    /// Applies the command to `set` and reports what changed.
    pub(crate) fn apply_to(self, set: &mut HashSet<ArtworkId>) -> SelectionDelta {
        let mut delta = SelectionDelta::default();
        match self {
            SelectionCommand::SetSelected { id, selected } => {
                let changed = if selected { set.insert(id) } else { set.remove(&id) };
                if changed {
                    delta.record(selected);
                }
            }
            SelectionCommand::Toggle(id) => {
                let selected = set.insert(id);
                if !selected {
                    set.remove(&id);
                }
                delta.record(selected);
            }
            SelectionCommand::ReconcilePage {
                page_ids,
                selected_on_page,
            } => {
                for id in page_ids {
                    let selected = selected_on_page.contains(&id);
                    let changed = if selected { set.insert(id) } else { set.remove(&id) };
                    if changed {
                        delta.record(selected);
                    }
                }
            }
            SelectionCommand::ReplaceAll(ids) => {
                delta.removed = set.difference(&ids).count();
                delta.added = ids.difference(set).count();
                *set = ids;
            }
            SelectionCommand::Clear => {
                delta.removed = set.len();
                set.clear();
            }
        }
        delta
    }
}

/// Counts of ids added and removed by one command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionDelta {
    pub added: usize,
    pub removed: usize,
}

impl SelectionDelta {
    /// Returns `true` if the command left the set unchanged.
    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0
    }

    fn record(&mut self, added: bool) {
        if added {
            self.added += 1;
        } else {
            self.removed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> HashSet<ArtworkId> {
        raw.iter().copied().map(ArtworkId::new).collect()
    }

    #[test]
    fn test_set_selected_is_idempotent() {
        let mut set = HashSet::new();
        let id = ArtworkId::new(4);

        let first = SelectionCommand::SetSelected { id, selected: true }.apply_to(&mut set);
        let second = SelectionCommand::SetSelected { id, selected: true }.apply_to(&mut set);
        let absent = SelectionCommand::SetSelected {
            id: ArtworkId::new(5),
            selected: false,
        }
        .apply_to(&mut set);

        assert_eq!(first, SelectionDelta { added: 1, removed: 0 });
        assert!(second.is_empty());
        assert!(absent.is_empty());
        assert_eq!(set, ids(&[4]));
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut set = ids(&[2]);

        let on = SelectionCommand::Toggle(ArtworkId::new(7)).apply_to(&mut set);
        let off = SelectionCommand::Toggle(ArtworkId::new(2)).apply_to(&mut set);

        assert_eq!(on, SelectionDelta { added: 1, removed: 0 });
        assert_eq!(off, SelectionDelta { added: 0, removed: 1 });
        assert_eq!(set, ids(&[7]));
    }

    #[test]
    fn test_reconcile_counts_changes() {
        let mut set = ids(&[2, 5]);
        let delta = SelectionCommand::ReconcilePage {
            page_ids: [1, 2, 3].map(ArtworkId::new).to_vec(),
            selected_on_page: ids(&[1, 3]),
        }
        .apply_to(&mut set);

        assert_eq!(set, ids(&[1, 3, 5]));
        assert_eq!(delta, SelectionDelta { added: 2, removed: 1 });
    }

    #[test]
    fn test_reconcile_ignores_checked_ids_off_page() {
        let mut set = ids(&[]);
        SelectionCommand::ReconcilePage {
            page_ids: vec![ArtworkId::new(1)],
            selected_on_page: ids(&[1, 99]),
        }
        .apply_to(&mut set);

        assert_eq!(set, ids(&[1]));
    }

    #[test]
    fn test_replace_all_delta() {
        let mut set = ids(&[1, 2, 3]);
        let delta = SelectionCommand::ReplaceAll(ids(&[3, 4])).apply_to(&mut set);

        assert_eq!(set, ids(&[3, 4]));
        assert_eq!(delta, SelectionDelta { added: 1, removed: 2 });
    }

    #[test]
    fn test_clear() {
        let mut set = ids(&[1, 2]);
        let delta = SelectionCommand::Clear.apply_to(&mut set);
        assert!(set.is_empty());
        assert_eq!(delta.removed, 2);
    }
}
