//! Dependency layer record (layer.json) data structures
//!
//! Each cached layer in the store carries a record describing what
//! produced it, so `cache list` can explain a layer and rebuilds can
//! trust a hit without re-running the installer.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StrataError};

/// File name of the layer record inside a layer directory
pub const LAYER_RECORD_FILE: &str = "layer.json";

/// Dependency layer record (layer.json)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerRecord {
    /// Layer identifier derived from base id, manifest hash and the
    /// base's install template as written in its manifest
    pub id: String,

    /// Base reference the layer was installed against
    pub base: String,

    /// Content hash of that base's rootfs
    pub base_id: String,

    /// Content hash of the dependency manifest
    pub manifest_hash: String,

    /// Rendered install argv that produced the layer
    pub command: Vec<String>,

    /// When the layer was installed
    pub created_at: DateTime<Utc>,
}

impl LayerRecord {
    /// Parse a layer record from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let record: Self =
            serde_json::from_str(json).map_err(|e| StrataError::StoreOperationFailed {
                message: format!("invalid layer record: {e}"),
            })?;
        Ok(record)
    }

    /// Load a layer record from a file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| StrataError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Serialize the record to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| StrataError::StoreOperationFailed {
                message: format!("cannot serialize layer record: {e}"),
            })?;
        Ok(json)
    }

    /// Write the record to a file path
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| StrataError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}
