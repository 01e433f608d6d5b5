//! Paged data access.
//!
//! - [`Page`] - one page of artworks with pagination info
//! - [`PageProvider`] - the source the table and the bulk selector read from
//! - [`InMemoryProvider`] - a fixed, ordered source for tests and demos

mod page;
mod provider;

pub use page::Page;
pub use provider::FetchCall;
pub use provider::InMemoryProvider;
pub use provider::PageProvider;
