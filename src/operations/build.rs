//! Build operation orchestration

use std::path::PathBuf;

use crate::build;
use crate::config::ImageManifest;
use crate::error::Result;
use crate::workspace::Workspace;

/// Options for a build
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Reinstall dependencies even when a matching layer is cached
    pub no_cache: bool,

    /// Stream installer output instead of capturing it
    pub verbose: bool,
}

/// Orchestrates one `strata build`
pub struct BuildOperation {
    workspace: Workspace,
    options: BuildOptions,
}

impl BuildOperation {
    /// Resolve the workspace for a start directory
    pub fn discover(start: PathBuf, options: BuildOptions) -> Result<Self> {
        let workspace = Workspace::discover(&start)?;
        Ok(Self { workspace, options })
    }

    /// Run the build pipeline
    pub fn execute(&self) -> Result<ImageManifest> {
        build::build_image(&self.workspace, self.options.no_cache, self.options.verbose)
    }
}
