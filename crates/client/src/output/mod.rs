//! Output formatting for CLI results.

pub mod pretty;

use serde::Serialize;

/// Render a value as compact JSON for `--format json`.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
