//! Cross-platform path utilities for Strata
//!
//! This module provides utilities for handling paths across different platforms
//! (Windows, macOS, Linux) with consistent behavior.

use std::path::Path;

/// Characters that are unsafe in filesystem paths
/// Replaced with hyphens and collapsed: `/`, `\`, `:`, `*`, `?`, `"`, `<`, `>`, `|`
const PATH_UNSAFE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Convert a path to a forward-slash string for display
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make an image or base name safe for filesystem use.
///
/// Image names and base name/tag pairs become store directory components,
/// so anything invalid on Windows or ambiguous in paths is replaced.
/// Consecutive hyphens are collapsed and leading/trailing hyphens removed.
/// Returns "unknown" if the result is empty.
///
/// # Examples
///
/// ```
/// use strata::path_utils::make_path_safe;
///
/// assert_eq!(make_path_safe("library/python"), "library-python");
/// assert_eq!(make_path_safe("3.12-slim"), "3.12-slim");
/// assert_eq!(make_path_safe(":::"), "unknown");
/// ```
pub fn make_path_safe(name: &str) -> String {
    let key: String = name
        .chars()
        .map(|c| {
            if PATH_UNSAFE_CHARS.contains(&c) {
                '-'
            } else {
                c
            }
        })
        .collect();

    let key = key
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .trim_matches('-')
        .to_string();

    if key.is_empty() {
        "unknown".to_string()
    } else {
        key
    }
}
