//! Staged store mutations with automatic rollback
//!
//! Store entries are assembled in a temporary directory next to their
//! final location and swapped in only once complete. A staged directory
//! that is dropped without being committed is removed, so a failed
//! install or an interrupted build never leaves a partial entry behind.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{Result, StrataError};

/// A staging directory for a pending store entry
#[derive(Debug)]
pub struct StagedDir {
    /// Staging location, a sibling of the target; cleaned up on drop
    temp: TempDir,

    /// Final location after commit
    target: PathBuf,
}

impl StagedDir {
    /// Create a staging directory next to `target`
    ///
    /// The parent of `target` is created if needed. Staging as a
    /// sibling keeps the final rename on one filesystem.
    pub fn new(target: PathBuf) -> Result<Self> {
        let parent = target
            .parent()
            .ok_or_else(|| StrataError::StoreOperationFailed {
                message: format!("store path {} has no parent", target.display()),
            })?;

        fs::create_dir_all(parent).map_err(|e| StrataError::StoreOperationFailed {
            message: format!("failed to create {}: {}", parent.display(), e),
        })?;

        let temp = TempDir::with_prefix_in(".staging-", parent).map_err(|e| {
            StrataError::StoreOperationFailed {
                message: format!("failed to create staging dir in {}: {}", parent.display(), e),
            }
        })?;

        Ok(Self { temp, target })
    }

    /// Path to stage content into
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Swap the staged directory into its final location
    ///
    /// An existing entry at the target is replaced.
    pub fn commit(self) -> Result<()> {
        if self.target.exists() {
            fs::remove_dir_all(&self.target).map_err(|e| StrataError::StoreOperationFailed {
                message: format!("failed to replace {}: {}", self.target.display(), e),
            })?;
        }

        // Disarm the drop cleanup; from here the directory is ours
        let staged = self.temp.keep();

        if let Err(e) = fs::rename(&staged, &self.target) {
            let _ = fs::remove_dir_all(&staged);
            return Err(StrataError::StoreOperationFailed {
                message: format!("failed to move {} into place: {}", self.target.display(), e),
            });
        }

        Ok(())
    }
}
