//! Title extraction from root-relative paths.

use std::path::MAIN_SEPARATOR;

/// Pick the grouping key for a root-relative path.
///
/// The path is split on the platform separator and the segment at `index`
/// is returned. Negative indices count from the end (`-1` is the file name,
/// `-3` is the show folder in `Show/Season/File`) and need at least
/// `|index|` segments; non-negative indices need `index + 1` segments.
/// Paths that are too short map to `fallback`.
pub fn group_key<'a>(relative_path: &'a str, index: isize, fallback: &'a str) -> &'a str {
    let parts: Vec<&str> = relative_path.split(MAIN_SEPARATOR).collect();
    let position = if index < 0 {
        parts.len().checked_sub(index.unsigned_abs())
    } else {
        Some(index.unsigned_abs())
    };

    position
        .and_then(|i| parts.get(i).copied())
        .unwrap_or(fallback)
}
