//! Table configuration

use crate::model::Field;

/// Configuration for a [`TableView`](crate::table::TableView).
///
/// # Example
///
/// ```
/// use artic_lib::TableConfig;
///
/// let config = TableConfig::default()
///     .with_page_size(24)
///     .with_bulk_page_size(50);
///
/// assert_eq!(config.page_size, 24);
/// assert_eq!(config.page_size_options, vec![12, 24, 60]);
/// ```
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Rows per displayed page when the view opens.
    ///
    /// Default: 12
    pub page_size: usize,

    /// Page sizes offered by the paginator.
    ///
    /// Default: 12, 24, 60
    pub page_size_options: Vec<usize>,

    /// Records per request during bulk selection. Independent of the
    /// displayed page size; larger values mean fewer round trips.
    ///
    /// Default: 100
    pub bulk_page_size: usize,

    /// Count pre-filled in the "select first N" input.
    ///
    /// Default: 10
    pub default_bulk_target: i64,

    /// Fields requested for displayed pages.
    pub display_fields: Vec<Field>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            page_size_options: vec![12, 24, 60],
            bulk_page_size: 100,
            default_bulk_target: 10,
            display_fields: Field::DISPLAY.to_vec(),
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial page size. Zero is raised to 1.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    /// Sets the page sizes offered by the paginator. Zeros are dropped.
    pub fn with_page_size_options(mut self, options: impl IntoIterator<Item = usize>) -> Self {
        self.page_size_options = options.into_iter().filter(|&n| n > 0).collect();
        self
    }

    /// Sets the bulk selection fetch size. Zero is raised to 1.
    pub fn with_bulk_page_size(mut self, size: usize) -> Self {
        self.bulk_page_size = size.max(1);
        self
    }

    /// Sets the pre-filled bulk selection count.
    pub fn with_default_bulk_target(mut self, n: i64) -> Self {
        self.default_bulk_target = n;
        self
    }

    /// Sets the fields requested for displayed pages.
    ///
    /// `id` is always requested, whether or not it is listed.
    pub fn with_display_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        let mut fields: Vec<Field> = fields.into_iter().filter(|f| *f != Field::Id).collect();
        fields.insert(0, Field::Id);
        self.display_fields = fields;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.bulk_page_size, 100);
        assert_eq!(config.default_bulk_target, 10);
        assert_eq!(config.display_fields, Field::DISPLAY);
    }

    #[test]
    fn test_zero_sizes_are_clamped() {
        let config = TableConfig::new()
            .with_page_size(0)
            .with_bulk_page_size(0)
            .with_page_size_options([0, 10, 0, 20]);
        assert_eq!(config.page_size, 1);
        assert_eq!(config.bulk_page_size, 1);
        assert_eq!(config.page_size_options, vec![10, 20]);
    }

    #[test]
    fn test_display_fields_always_include_id() {
        let config = TableConfig::new().with_display_fields([Field::Title, Field::Id, Field::DateEnd]);
        assert_eq!(config.display_fields, vec![Field::Id, Field::Title, Field::DateEnd]);
    }
}
