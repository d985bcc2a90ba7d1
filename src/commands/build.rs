//! Build command implementation

use std::path::PathBuf;

use crate::cli::BuildArgs;
use crate::error::Result;
use crate::operations::BuildOperation;
use crate::operations::build::BuildOptions;

use super::helpers::resolve_start_dir;

/// Run build command
pub fn run(workspace: Option<PathBuf>, verbose: bool, args: BuildArgs) -> Result<()> {
    let start = resolve_start_dir(workspace)?;

    let options = BuildOptions {
        no_cache: args.no_cache,
        verbose,
    };

    let operation = BuildOperation::discover(start, options)?;
    operation.execute()?;

    Ok(())
}
