//! Error types

mod fetch;
mod input;

pub use fetch::*;
pub use input::*;

/// Top-level error for operations that can fail in more than one way.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A provider fetch failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Caller input was rejected.
    #[error(transparent)]
    Input(#[from] InputError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails_with_input() -> Result<(), Error> {
        let rejected: Result<(), InputError> = Err(InputError::NonPositiveTarget(-1));
        rejected?;
        Ok(())
    }

    #[test]
    fn test_from_conversions() {
        assert!(matches!(fails_with_input(), Err(Error::Input(InputError::NonPositiveTarget(-1)))));

        let err: Error = FetchError::http(502, "bad gateway").into();
        assert_eq!(err.to_string(), "HTTP 502: bad gateway");
    }
}
