//! Cross-page selection.
//!
//! - [`SelectionStore`] - the global set of selected ids
//! - [`SelectionCommand`] - the mutations the store accepts
//! - [`PageSelection`] - the store projected onto the displayed page
//! - [`BulkSelector`] - replaces the set with the first N ids of the source

mod bulk;
mod command;
mod projection;
mod store;

pub use bulk::BulkOutcome;
pub use bulk::BulkSelector;
pub use bulk::BulkState;
pub use bulk::BulkStatus;
pub use bulk::BulkWalk;
pub use bulk::DEFAULT_BULK_PAGE_SIZE;
pub use bulk::validate_target;
pub use command::SelectionCommand;
pub use command::SelectionDelta;
pub use projection::PageSelection;
pub use store::SelectionStore;
