//! Workspace handling for Strata
//!
//! A workspace is any directory containing a `strata.yaml` recipe. The
//! recipe's manifest and project paths are resolved against the
//! workspace root.

use std::path::{Path, PathBuf};

use crate::common::path_normalizer::normalize_path;
use crate::config::{RECIPE_FILE, Recipe};
use crate::error::{Result, StrataError};

pub mod detection;

/// An opened Strata workspace
#[derive(Debug)]
pub struct Workspace {
    /// Root directory of the workspace (where strata.yaml is located)
    pub root: PathBuf,

    /// Build recipe (strata.yaml)
    pub recipe: Recipe,
}

impl Workspace {
    /// Open a workspace at the given root, loading and validating its recipe
    pub fn open(root: &Path) -> Result<Self> {
        let root = normalize_path(root);
        let recipe = Recipe::from_file(&root.join(RECIPE_FILE))?;

        Ok(Self { root, recipe })
    }

    /// Locate and open the workspace for a start directory
    ///
    /// Walks up from `start` to the filesystem root looking for a
    /// recipe file.
    pub fn discover(start: &Path) -> Result<Self> {
        let root = detection::find_from(start).ok_or_else(|| StrataError::RecipeNotFound {
            path: start.join(RECIPE_FILE).display().to_string(),
        })?;

        Self::open(&root)
    }

    /// Absolute path of the recipe's dependency manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.recipe.manifest)
    }

    /// Absolute path of the recipe's project directory
    pub fn project_dir(&self) -> PathBuf {
        normalize_path(&self.root.join(&self.recipe.project))
    }
}
