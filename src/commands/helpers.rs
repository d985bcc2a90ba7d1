//! Command helper utilities

use std::path::PathBuf;

use crate::error::{Result, StrataError};

/// Resolve the start directory from the optional --workspace argument
///
/// If a workspace path is provided, use it. Otherwise, resolve to the
/// current directory.
pub fn resolve_start_dir(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| StrataError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}
