//! Cell formatting helpers for the rendering surface.

/// Default cell width used by [`truncate`] for long text columns.
pub const DEFAULT_TRUNCATE: usize = 80;

const PLACEHOLDER: &str = "-";

/// Returns the value, or `-` when it is missing or empty.
pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => PLACEHOLDER,
    }
}

/// Shortens a value to at most `max` characters, appending `…` when cut.
///
/// Missing or empty values render as `-`. Counts characters, not bytes.
pub fn truncate(value: Option<&str>, max: usize) -> String {
    let value = or_dash(value);
    match value.char_indices().nth(max) {
        Some((cut, _)) => format!("{}…", &value[..cut]),
        None => value.to_string(),
    }
}

/// Renders a year, or `-` when unknown.
pub fn year(value: Option<i32>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |y| y.to_string())
}
