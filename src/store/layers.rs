//! Cached dependency layer lookup and management
//!
//! A layer directory holds the installed dependencies (`deps/`), the
//! record of what produced them (`layer.json`) and a snapshot of the
//! dependency manifest they were resolved from. Layers are immutable
//! once committed; a build either reuses one wholesale or installs a
//! new one under a different identifier.

use std::fs;
use std::path::PathBuf;

use crate::config::{LAYER_RECORD_FILE, LayerRecord};
use crate::error::{Result, StrataError};

/// Deps subdirectory within a layer entry
pub const DEPS_DIR: &str = "deps";

/// Snapshot of the dependency manifest the layer was installed from
pub const MANIFEST_SNAPSHOT_FILE: &str = "manifest.txt";

/// Get the store directory for a layer id
pub fn layer_dir(id: &str) -> Result<PathBuf> {
    Ok(super::layers_dir()?.join(id))
}

/// Get the deps directory for a layer id
pub fn deps_dir(id: &str) -> Result<PathBuf> {
    Ok(layer_dir(id)?.join(DEPS_DIR))
}

/// Get the record path for a layer id
pub fn record_path(id: &str) -> Result<PathBuf> {
    Ok(layer_dir(id)?.join(LAYER_RECORD_FILE))
}

/// Check whether a layer is committed to the store
///
/// The record is written into the staged directory before commit, so
/// its presence at the final location means the whole layer is there.
pub fn exists(id: &str) -> Result<bool> {
    Ok(record_path(id)?.is_file())
}

/// Load a committed layer's record
pub fn load(id: &str) -> Result<LayerRecord> {
    if !exists(id)? {
        return Err(StrataError::LayerMissing { id: id.to_string() });
    }

    LayerRecord::from_file(&record_path(id)?)
}

/// Read the manifest snapshot stored with a layer
pub fn manifest_snapshot(id: &str) -> Result<String> {
    let path = layer_dir(id)?.join(MANIFEST_SNAPSHOT_FILE);
    fs::read_to_string(&path).map_err(|e| StrataError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// List all committed layers, newest first
pub fn list() -> Result<Vec<LayerRecord>> {
    let path = super::layers_dir()?;

    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut layers = Vec::new();

    for entry in fs::read_dir(&path).map_err(|e| StrataError::StoreOperationFailed {
        message: format!("failed to read layers directory: {e}"),
    })? {
        let entry = entry.map_err(|e| StrataError::StoreOperationFailed {
            message: format!("failed to read entry: {e}"),
        })?;

        let record_file = entry.path().join(LAYER_RECORD_FILE);
        if !record_file.is_file() {
            continue;
        }

        match LayerRecord::from_file(&record_file) {
            Ok(record) => layers.push(record),
            Err(_) => continue, // Skip damaged entries
        }
    }

    layers.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(layers)
}

/// Remove one committed layer
pub fn remove(id: &str) -> Result<()> {
    if !exists(id)? {
        return Err(StrataError::LayerMissing { id: id.to_string() });
    }

    fs::remove_dir_all(layer_dir(id)?).map_err(|e| StrataError::StoreOperationFailed {
        message: format!("failed to remove layer {id}: {e}"),
    })?;

    Ok(())
}

/// Remove all committed layers, returning how many were removed
pub fn clear() -> Result<usize> {
    let removed = list()?.len();

    let path = super::layers_dir()?;
    if path.exists() {
        fs::remove_dir_all(&path).map_err(|e| StrataError::StoreOperationFailed {
            message: format!("failed to clear layers: {e}"),
        })?;
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StagedDir;
    use chrono::Utc;
    use serial_test::serial;
    use tempfile::TempDir;

    fn with_store<F: FnOnce()>(f: F) {
        let store = TempDir::new().unwrap();
        let original = std::env::var("STRATA_STORE_DIR").ok();
        unsafe {
            std::env::set_var("STRATA_STORE_DIR", store.path());
        }

        f();

        unsafe {
            if let Some(o) = original {
                std::env::set_var("STRATA_STORE_DIR", o);
            } else {
                std::env::remove_var("STRATA_STORE_DIR");
            }
        }
    }

    fn commit_layer(id: &str) {
        let staged = StagedDir::new(layer_dir(id).unwrap()).unwrap();
        fs::create_dir(staged.path().join(DEPS_DIR)).unwrap();
        fs::write(staged.path().join(MANIFEST_SNAPSHOT_FILE), "requests==2.31.0\n").unwrap();

        let record = LayerRecord {
            id: id.to_string(),
            base: "sh:1.0".to_string(),
            base_id: "bb".repeat(32),
            manifest_hash: "cc".repeat(32),
            command: vec!["install".to_string()],
            created_at: Utc::now(),
        };
        record.save(&staged.path().join(LAYER_RECORD_FILE)).unwrap();
        staged.commit().unwrap();
    }

    #[test]
    #[serial]
    fn test_exists_and_load() {
        with_store(|| {
            let id = "aa".repeat(32);
            assert!(!exists(&id).unwrap());

            commit_layer(&id);
            assert!(exists(&id).unwrap());

            let record = load(&id).unwrap();
            assert_eq!(record.id, id);
            assert_eq!(record.base, "sh:1.0");
        });
    }

    #[test]
    #[serial]
    fn test_load_missing() {
        with_store(|| {
            let result = load("deadbeef");
            assert!(matches!(result, Err(StrataError::LayerMissing { .. })));
        });
    }

    #[test]
    #[serial]
    fn test_manifest_snapshot() {
        with_store(|| {
            let id = "aa".repeat(32);
            commit_layer(&id);

            let snapshot = manifest_snapshot(&id).unwrap();
            assert_eq!(snapshot, "requests==2.31.0\n");
        });
    }

    #[test]
    #[serial]
    fn test_list_and_remove() {
        with_store(|| {
            commit_layer(&"aa".repeat(32));
            commit_layer(&"bb".repeat(32));

            assert_eq!(list().unwrap().len(), 2);

            remove(&"aa".repeat(32)).unwrap();
            assert_eq!(list().unwrap().len(), 1);
            assert!(!exists(&"aa".repeat(32)).unwrap());
        });
    }

    #[test]
    #[serial]
    fn test_remove_missing() {
        with_store(|| {
            let result = remove("deadbeef");
            assert!(matches!(result, Err(StrataError::LayerMissing { .. })));
        });
    }

    #[test]
    #[serial]
    fn test_clear() {
        with_store(|| {
            commit_layer(&"aa".repeat(32));
            commit_layer(&"bb".repeat(32));

            assert_eq!(clear().unwrap(), 2);
            assert!(list().unwrap().is_empty());

            // Clearing an empty store is fine
            assert_eq!(clear().unwrap(), 0);
        });
    }
}
