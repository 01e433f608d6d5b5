//! Displayed slice of the record sequence

use std::num::NonZeroUsize;

use crate::error::InputError;

/// The offset/size slice of the full ordered sequence that is displayed.
///
/// The paginator keeps `offset` a multiple of `page_size`; when it isn't,
/// the page containing `offset` is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    offset: usize,
    page_size: NonZeroUsize,
}

impl PageWindow {
    /// Creates a window, rejecting a zero page size.
    pub fn new(offset: usize, page_size: usize) -> Result<Self, InputError> {
        let page_size = NonZeroUsize::new(page_size).ok_or(InputError::ZeroPageSize)?;
        Ok(Self { offset, page_size })
    }

    /// Creates a window on the first page.
    pub fn first(page_size: NonZeroUsize) -> Self {
        Self { offset: 0, page_size }
    }

    /// Index of the first displayed row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// The 1-based page number to request from a provider.
    pub fn page_number(&self) -> usize {
        self.offset / self.page_size.get() + 1
    }

    /// The 1-based inclusive row range shown for `total` records, or `None`
    /// when the window is past the end.
    pub fn row_range(&self, total: usize) -> Option<(usize, usize)> {
        let start = (self.page_number() - 1) * self.page_size.get();
        if start >= total {
            return None;
        }
        Some((start + 1, (start + self.page_size.get()).min(total)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_number() {
        assert_eq!(PageWindow::new(0, 12).unwrap().page_number(), 1);
        assert_eq!(PageWindow::new(24, 12).unwrap().page_number(), 3);
        assert_eq!(PageWindow::new(30, 12).unwrap().page_number(), 3);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert_eq!(PageWindow::new(0, 0), Err(InputError::ZeroPageSize));
    }

    #[test]
    fn test_row_range() {
        let window = PageWindow::new(24, 12).unwrap();
        assert_eq!(window.row_range(100), Some((25, 36)));
        assert_eq!(window.row_range(30), Some((25, 30)));
        assert_eq!(window.row_range(24), None);
    }
}
