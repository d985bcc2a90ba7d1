//! Workspace build recipe (strata.yaml) data structures
//!
//! The recipe names the image, picks a base runtime and points at the
//! dependency manifest, project directory and entry-point file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::BaseRef;
use crate::error::{Result, StrataError};

/// File name of the workspace recipe
pub const RECIPE_FILE: &str = "strata.yaml";

fn default_project() -> String {
    ".".to_string()
}

/// Workspace build recipe (strata.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Image name to build
    pub name: String,

    /// Base runtime reference, e.g. `python:3.12`
    pub base: String,

    /// Dependency manifest file, relative to the workspace root
    pub manifest: String,

    /// Project directory to copy into the image, relative to the
    /// workspace root
    #[serde(default = "default_project")]
    pub project: String,

    /// Entry-point file launched by the base's run command
    pub entrypoint: String,

    /// Optional launch argv template replacing the base's run command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
}

impl Recipe {
    /// Parse a recipe from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let recipe: Self = serde_yaml::from_str(yaml)?;
        Ok(recipe)
    }

    /// Load a recipe from a file path
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StrataError::RecipeNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| StrataError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let recipe: Self =
            serde_yaml::from_str(&content).map_err(|e| StrataError::RecipeParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        recipe.validate()?;
        Ok(recipe)
    }

    /// Parse the recipe's base reference
    pub fn base_ref(&self) -> Result<BaseRef> {
        BaseRef::parse(&self.base)
    }

    /// Validate the recipe
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(StrataError::RecipeInvalid {
                message: "Image name cannot be empty".to_string(),
            });
        }

        if self.manifest.is_empty() {
            return Err(StrataError::RecipeInvalid {
                message: "Dependency manifest cannot be empty".to_string(),
            });
        }

        if self.entrypoint.is_empty() {
            return Err(StrataError::RecipeInvalid {
                message: "Entry point cannot be empty".to_string(),
            });
        }

        if let Some(command) = &self.command {
            if command.is_empty() {
                return Err(StrataError::RecipeInvalid {
                    message: "Command override cannot be an empty list".to_string(),
                });
            }
        }

        // Surfaces malformed references at load time instead of mid-build
        self.base_ref()?;

        Ok(())
    }
}
