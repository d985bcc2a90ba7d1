//! Run command implementation
//!
//! Unlike the other commands this one returns an exit code: the
//! launched entry point's status is the unit's status, propagated
//! unchanged by `main`.

use std::path::PathBuf;

use crate::cli::RunArgs;
use crate::error::Result;
use crate::operations::RunOperation;

use super::helpers::resolve_start_dir;

/// Run the run command, returning the launched process's exit code
pub fn run(workspace: Option<PathBuf>, verbose: bool, args: RunArgs) -> Result<i32> {
    let start = resolve_start_dir(workspace)?;

    let operation = RunOperation::resolve(args.name, start, verbose)?;
    operation.execute()
}
