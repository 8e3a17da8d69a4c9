//! Helpers for sanitizing data before it enters tracing span attributes.
//!
//! Uploaded names may carry client-side directory components; spans only
//! ever see the final file name.

use std::path::Path;

/// Returns only the filename component of a path (no directory).
pub fn redact_path(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
        .to_string()
}

/// Like [`redact_path`] for names that arrive as strings, with either
/// separator style.
pub fn redact_name(name: &str) -> String {
    let last = name.rsplit(['/', '\\']).next().unwrap_or("");
    if last.is_empty() {
        "<unknown>".to_string()
    } else {
        last.to_string()
    }
}
