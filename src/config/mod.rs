//! Configuration file handling for Strata
//!
//! This module contains data structures for:
//! - `strata.yaml` - Workspace build recipe
//! - `base.yaml` - Base runtime manifest
//! - `layer.json` - Dependency layer record in the store
//! - `image.json` - Built image manifest in the store

pub mod base_manifest;
pub mod dependencies;
pub mod image_manifest;
pub mod layer_record;
pub mod recipe;

// Re-export commonly used types
pub use base_manifest::{BASE_MANIFEST_FILE, BaseManifest};
pub use dependencies::DependencyEntry;
pub use image_manifest::{IMAGE_MANIFEST_FILE, ImageManifest};
pub use layer_record::{LAYER_RECORD_FILE, LayerRecord};
pub use recipe::{RECIPE_FILE, Recipe};
