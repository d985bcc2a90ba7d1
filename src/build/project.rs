//! Project materialization, the third build step
//!
//! Copies the full project tree into the staged image's app directory.
//! By contract there is no filtering, transformation or validation;
//! the tree lands in the image exactly as it is on disk.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, StrataError};
use crate::path_utils::to_forward_slashes;
use crate::progress::CopyProgress;

/// Copy the project tree into `dst`, returning the number of files
pub fn materialize(src: &Path, dst: &Path) -> Result<u64> {
    if !src.is_dir() {
        return Err(StrataError::FileNotFound {
            path: src.display().to_string(),
        });
    }

    let total = WalkDir::new(src)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count() as u64;

    let progress = CopyProgress::new(total);

    let result = copy_tree(src, dst, &progress);
    match result {
        Ok(()) => {
            progress.finish();
            Ok(total)
        }
        Err(e) => {
            progress.abandon();
            Err(e)
        }
    }
}

fn copy_tree(src: &Path, dst: &Path, progress: &CopyProgress) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| StrataError::StoreOperationFailed {
            message: format!("failed to walk project tree: {e}"),
        })?;

        let relative = entry
            .path()
            .strip_prefix(src)
            .unwrap_or_else(|_| entry.path());
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| StrataError::StoreOperationFailed {
                message: format!("failed to create {}: {}", target.display(), e),
            })?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| StrataError::StoreOperationFailed {
                message: format!(
                    "failed to copy {} into the image: {}",
                    entry.path().display(),
                    e
                ),
            })?;
            progress.update(&to_forward_slashes(relative));
        }
    }

    Ok(())
}
