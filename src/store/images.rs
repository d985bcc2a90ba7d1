//! Built image lookup and management
//!
//! An image directory holds the manifest (`image.json`) and the copied
//! project tree (`app/`). Images are addressed by name; rebuilding an
//! image replaces its directory atomically.

use std::fs;
use std::path::PathBuf;

use crate::config::{IMAGE_MANIFEST_FILE, ImageManifest};
use crate::error::{Result, StrataError};
use crate::path_utils::make_path_safe;

/// App subdirectory within an image entry
pub const APP_DIR: &str = "app";

/// Get the store directory for an image name
pub fn image_dir(name: &str) -> Result<PathBuf> {
    Ok(super::images_dir()?.join(make_path_safe(name)))
}

/// Get the application directory for an image name
pub fn app_dir(name: &str) -> Result<PathBuf> {
    Ok(image_dir(name)?.join(APP_DIR))
}

/// Get the manifest path for an image name
pub fn manifest_path(name: &str) -> Result<PathBuf> {
    Ok(image_dir(name)?.join(IMAGE_MANIFEST_FILE))
}

/// Check whether an image is built
pub fn exists(name: &str) -> Result<bool> {
    Ok(manifest_path(name)?.is_file())
}

/// Load a built image's manifest
pub fn load(name: &str) -> Result<ImageManifest> {
    if !exists(name)? {
        return Err(StrataError::ImageNotFound {
            name: name.to_string(),
        });
    }

    ImageManifest::from_file(&manifest_path(name)?, name)
}

/// List all built images, sorted by name
pub fn list() -> Result<Vec<ImageManifest>> {
    let path = super::images_dir()?;

    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut images = Vec::new();

    for entry in fs::read_dir(&path).map_err(|e| StrataError::StoreOperationFailed {
        message: format!("failed to read images directory: {e}"),
    })? {
        let entry = entry.map_err(|e| StrataError::StoreOperationFailed {
            message: format!("failed to read entry: {e}"),
        })?;

        let manifest_file = entry.path().join(IMAGE_MANIFEST_FILE);
        if !manifest_file.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        match ImageManifest::from_file(&manifest_file, &name) {
            Ok(manifest) => images.push(manifest),
            Err(_) => continue, // Skip damaged entries
        }
    }

    images.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(images)
}

/// Remove a built image
pub fn remove(name: &str) -> Result<()> {
    if !exists(name)? {
        return Err(StrataError::ImageNotFound {
            name: name.to_string(),
        });
    }

    fs::remove_dir_all(image_dir(name)?).map_err(|e| StrataError::StoreOperationFailed {
        message: format!("failed to remove image {name}: {e}"),
    })?;

    Ok(())
}
