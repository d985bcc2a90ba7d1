//! Base runtime manifest (base.yaml) data structures
//!
//! Every registered base carries a manifest next to its rootfs that
//! describes how dependencies are installed and how an image is run.
//! Command entries are argv templates rendered through
//! [`crate::domain::TemplateContext`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StrataError};

/// File name of the base manifest inside a base directory
pub const BASE_MANIFEST_FILE: &str = "base.yaml";

/// Base runtime manifest (base.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseManifest {
    /// Base name, filled in at registration from the reference
    #[serde(default)]
    pub name: String,

    /// Base tag, filled in at registration from the reference
    #[serde(default)]
    pub tag: String,

    /// Content hash of the rootfs tree, computed at registration
    #[serde(default)]
    pub id: String,

    /// Argv template for installing the dependency manifest into a layer
    pub install: Vec<String>,

    /// Argv template for launching an image's entry point
    pub run: Vec<String>,

    /// Environment variables for install and run; values may use
    /// template placeholders
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl BaseManifest {
    /// Parse a base manifest from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(yaml)?;
        Ok(manifest)
    }

    /// Load a base manifest from a file path
    ///
    /// `reference` is only used for error reporting.
    pub fn from_file(path: &Path, reference: &str) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| StrataError::BaseManifestInvalid {
            reference: reference.to_string(),
            message: format!("cannot read {}: {}", path.display(), e),
        })?;

        let manifest: Self =
            serde_yaml::from_str(&content).map_err(|e| StrataError::BaseManifestInvalid {
                reference: reference.to_string(),
                message: e.to_string(),
            })?;

        Ok(manifest)
    }

    /// Serialize the manifest to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(yaml)
    }

    /// Write the manifest to a file path
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path, yaml).map_err(|e| StrataError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Validate the manifest
    ///
    /// `reference` is only used for error reporting.
    pub fn validate(&self, reference: &str) -> Result<()> {
        if self.install.is_empty() {
            return Err(StrataError::BaseManifestInvalid {
                reference: reference.to_string(),
                message: "missing 'install' command".to_string(),
            });
        }

        if self.run.is_empty() {
            return Err(StrataError::BaseManifestInvalid {
                reference: reference.to_string(),
                message: "missing 'run' command".to_string(),
            });
        }

        Ok(())
    }
}
