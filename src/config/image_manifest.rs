//! Built image manifest (image.json) data structures
//!
//! The manifest records what an image was assembled from. It stores
//! references (base reference, layer id) rather than absolute paths,
//! so a store can be relocated and launch commands are re-rendered
//! against the live store on every run.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StrataError};

/// File name of the image manifest inside an image directory
pub const IMAGE_MANIFEST_FILE: &str = "image.json";

/// Built image manifest (image.json)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageManifest {
    /// Image name from the recipe
    pub name: String,

    /// Image identifier derived from base id, layer id, application
    /// tree hash and the entry command
    pub id: String,

    /// Base reference the image was built against
    pub base: String,

    /// Content hash of that base's rootfs
    pub base_id: String,

    /// Dependency layer identifier
    pub layer: String,

    /// Content hash of the application tree
    pub app_hash: String,

    /// Entry-point file inside the application tree
    pub entrypoint: String,

    /// Optional launch argv template from the recipe, replacing the
    /// base's run command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,

    /// When the image was built
    pub created_at: DateTime<Utc>,
}

impl ImageManifest {
    /// Parse an image manifest from a JSON string
    ///
    /// `name` is only used for error reporting.
    pub fn from_json(json: &str, name: &str) -> Result<Self> {
        let manifest: Self =
            serde_json::from_str(json).map_err(|e| StrataError::ImageManifestInvalid {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        Ok(manifest)
    }

    /// Load an image manifest from a file path
    pub fn from_file(path: &Path, name: &str) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| StrataError::ImageManifestInvalid {
            name: name.to_string(),
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_json(&content, name)
    }

    /// Serialize the manifest to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| StrataError::ImageManifestInvalid {
                name: self.name.clone(),
                reason: e.to_string(),
            })?;
        Ok(json)
    }

    /// Write the manifest to a file path
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| StrataError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}
