//! Path display utilities for consistent output formatting.
//!
//! Violation paths are stored and displayed relative to the repository root
//! with forward-slash separators on every platform, so the same rule
//! patterns and the same report lines are produced on Windows and Unix.

use std::path::Path;

/// Normalize path separators to forward slashes.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Format a path for display, making it relative to the repository root if possible.
///
/// - If `path` is a child of `root`, returns the relative path.
/// - Uses forward slashes as separators for consistent cross-platform output.
/// - If the path cannot be made relative, returns the path as-is with
///   normalized separators.
/// - Returns `"."` when `path` equals `root`.
#[must_use]
pub fn display_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let result = normalize_separators(&rel.to_string_lossy());

    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}

/// Join a relative-path prefix and a further relative segment with `/`.
///
/// An empty prefix yields the segment unchanged; an empty segment yields
/// the prefix unchanged.
#[must_use]
pub fn join_rel(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else if segment.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix}/{segment}")
    }
}

#[cfg(test)]
#[path = "path_utils_tests.rs"]
mod tests;
