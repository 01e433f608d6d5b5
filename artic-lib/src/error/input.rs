//! Input validation error types

/// Rejected caller input. Returned before any fetch or store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// No bulk selection target was given.
    #[error("No selection count given")]
    MissingTarget,

    /// The bulk selection target was zero or negative.
    #[error("Selection count must be positive, got {0}")]
    NonPositiveTarget(i64),

    /// A page window or fetch was requested with a page size of zero.
    #[error("Page size must be at least 1")]
    ZeroPageSize,
}
