//! Store statistics
//!
//! Counts and sizes for the `strata cache` command and the store
//! overview it prints.

use std::path::Path;

use walkdir::WalkDir;

use crate::common::display::format_size;
use crate::error::Result;

/// Aggregated store statistics
#[derive(Debug, Default)]
pub struct StoreStats {
    /// Number of registered bases
    pub bases: usize,
    /// Number of cached dependency layers
    pub layers: usize,
    /// Number of built images
    pub images: usize,
    /// Total size of the layers section in bytes
    pub layers_size: u64,
    /// Total size of the whole store in bytes
    pub total_size: u64,
}

impl StoreStats {
    /// Format the layers size as a human-readable string
    pub fn formatted_layers_size(&self) -> String {
        format_size(self.layers_size)
    }

    /// Format the total size as a human-readable string
    pub fn formatted_total_size(&self) -> String {
        format_size(self.total_size)
    }
}

/// Collect statistics for the whole store
pub fn store_stats() -> Result<StoreStats> {
    let layers_dir = super::layers_dir()?;

    Ok(StoreStats {
        bases: super::bases::list()?.len(),
        layers: super::layers::list()?.len(),
        images: super::images::list()?.len(),
        layers_size: dir_size(&layers_dir),
        total_size: dir_size(&super::store_dir()?),
    })
}

/// Total size of all files under a directory, zero if it does not exist
fn dir_size(path: &Path) -> u64 {
    if !path.exists() {
        return 0;
    }

    WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_stats_empty_store() {
        let store = TempDir::new().unwrap();
        let original = std::env::var("STRATA_STORE_DIR").ok();
        unsafe {
            std::env::set_var("STRATA_STORE_DIR", store.path());
        }

        let stats = store_stats().unwrap();
        assert_eq!(stats.bases, 0);
        assert_eq!(stats.layers, 0);
        assert_eq!(stats.images, 0);
        assert_eq!(stats.layers_size, 0);

        unsafe {
            if let Some(o) = original {
                std::env::set_var("STRATA_STORE_DIR", o);
            } else {
                std::env::remove_var("STRATA_STORE_DIR");
            }
        }
    }

    #[test]
    fn test_dir_size() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a"), vec![0u8; 100]).unwrap();
        std::fs::create_dir(temp.path().join("sub")).unwrap();
        std::fs::write(temp.path().join("sub/b"), vec![0u8; 50]).unwrap();

        assert_eq!(dir_size(temp.path()), 150);
    }

    #[test]
    fn test_dir_size_missing() {
        assert_eq!(dir_size(Path::new("/nonexistent/strata-store")), 0);
    }

    #[test]
    fn test_formatted_sizes() {
        let stats = StoreStats {
            layers_size: 512,
            total_size: 2 * 1024 * 1024,
            ..Default::default()
        };
        assert_eq!(stats.formatted_layers_size(), "512 B");
        assert_eq!(stats.formatted_total_size(), "2.0 MB");
    }
}
