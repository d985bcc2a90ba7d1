//! Run operation orchestration
//!
//! Selects the image to launch: an explicit name wins, otherwise the
//! workspace recipe names the default.

use std::path::PathBuf;

use crate::error::Result;
use crate::launch;
use crate::store;
use crate::workspace::Workspace;

/// Orchestrates one `strata run`
pub struct RunOperation {
    image_name: String,
    verbose: bool,
}

impl RunOperation {
    /// Resolve which image to run
    ///
    /// With no explicit name the workspace recipe is consulted, so
    /// `strata run` inside a workspace launches the image it builds.
    pub fn resolve(name: Option<String>, start: PathBuf, verbose: bool) -> Result<Self> {
        let image_name = match name {
            Some(name) => name,
            None => Workspace::discover(&start)?.recipe.name,
        };

        Ok(Self {
            image_name,
            verbose,
        })
    }

    /// Launch the image and return the child's exit code
    pub fn execute(&self) -> Result<i32> {
        let manifest = store::images::load(&self.image_name)?;
        launch::launch(&manifest, self.verbose)
    }
}
