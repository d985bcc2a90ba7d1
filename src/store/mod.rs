//! Image store for Strata
//!
//! This module handles the on-disk store holding registered bases,
//! cached dependency layers and built images.
//!
//! ## Store Structure
//!
//! ```text
//! ~/.local/share/strata/
//! ├── bases/
//! │   └── <name>/
//! │       └── <tag>/
//! │           ├── base.yaml
//! │           └── rootfs/
//! ├── layers/
//! │   └── <layer-id>/
//! │       ├── layer.json
//! │       └── deps/
//! └── images/
//!     └── <name>/
//!         ├── image.json
//!         └── app/
//! ```
//!
//! Layer identifiers are BLAKE3 digests over the base's rootfs hash,
//! the dependency manifest hash and the base's install template, so a
//! layer is reused exactly when none of its inputs changed.

use std::path::PathBuf;

use crate::error::{Result, StrataError};

pub mod bases;
pub mod images;
pub mod layers;
pub mod staging;
pub mod stats;

pub use staging::StagedDir;
pub use stats::{StoreStats, store_stats};

/// Default store directory name under the user's local data directory
const STORE_DIR: &str = "strata";

/// Bases subdirectory within the store
const BASES_DIR: &str = "bases";

/// Layers subdirectory within the store
const LAYERS_DIR: &str = "layers";

/// Images subdirectory within the store
const IMAGES_DIR: &str = "images";

/// Get the store directory path
///
/// Returns `~/.local/share/strata` on Unix or equivalent on other
/// platforms.
///
/// Can be overridden with the `STRATA_STORE_DIR` environment variable.
pub fn store_dir() -> Result<PathBuf> {
    if let Ok(store_dir) = std::env::var("STRATA_STORE_DIR") {
        return Ok(PathBuf::from(store_dir));
    }

    let base = dirs::data_local_dir().ok_or_else(|| StrataError::StoreOperationFailed {
        message: "Could not determine data directory".to_string(),
    })?;

    Ok(base.join(STORE_DIR))
}

/// Get the bases directory path
pub fn bases_dir() -> Result<PathBuf> {
    Ok(store_dir()?.join(BASES_DIR))
}

/// Get the layers directory path
pub fn layers_dir() -> Result<PathBuf> {
    Ok(store_dir()?.join(LAYERS_DIR))
}

/// Get the images directory path
pub fn images_dir() -> Result<PathBuf> {
    Ok(store_dir()?.join(IMAGES_DIR))
}
