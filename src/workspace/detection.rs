//! Workspace detection utilities
//!
//! The workspace root is the nearest ancestor directory containing a
//! `strata.yaml` recipe.

use std::path::{Path, PathBuf};

use crate::common::path_normalizer::normalize_path;
use crate::config::RECIPE_FILE;

/// Detect if a workspace exists at the given path
pub fn exists(root: &Path) -> bool {
    root.join(RECIPE_FILE).is_file()
}

/// Find the workspace root for a start directory
///
/// Walks up from `start` to the filesystem root and returns the first
/// directory containing a recipe file, or `None` if there is none.
pub fn find_from(start: &Path) -> Option<PathBuf> {
    let start = normalize_path(start);
    let mut current = start.as_path();

    loop {
        if exists(current) {
            return Some(current.to_path_buf());
        }

        current = current.parent()?;
    }
}
