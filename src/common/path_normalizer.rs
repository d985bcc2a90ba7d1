//! Path normalization utilities
//!
//! Workspace roots, project directories and base source directories all
//! end up in hashes or stored references, so they are normalized to
//! canonical absolute paths first.

use normpath::PathExt;
use std::path::{Path, PathBuf};

/// Normalize a path (canonicalize with Windows path handling)
///
/// Resolves symlinks and relative components if the path exists. For
/// non-existent paths, normalizes the longest existing ancestor and
/// appends the remaining components, so `/var/...` and `/private/var/...`
/// on macOS compare equal even before the leaf is created.
pub fn normalize_path(path: &Path) -> PathBuf {
    // Try to normalize the full path first
    if let Ok(norm) = path.normalize() {
        return norm.as_path().to_path_buf();
    }

    // If the path doesn't exist, find the longest existing ancestor and normalize it
    let mut current = path;
    let mut components = Vec::new();

    // Walk up the tree until we find an existing path
    while !current.exists() {
        if let Some(file_name) = current.file_name() {
            components.push(file_name);
            if let Some(parent) = current.parent() {
                current = parent;
            } else {
                // No parent, can't normalize
                return path.to_path_buf();
            }
        } else {
            // No file name, can't normalize
            return path.to_path_buf();
        }
    }

    // Normalize the existing ancestor
    let normalized_base = current
        .normalize()
        .map(|norm| norm.as_path().to_path_buf())
        .unwrap_or_else(|_| current.to_path_buf());

    // Append the non-existent components back
    let mut result = normalized_base;
    for component in components.iter().rev() {
        result = result.join(component);
    }

    result
}
