//! Rm command implementation
//!
//! Removes a built image after confirmation. Bases and cached layers
//! are left alone; they are shared with other images.

use inquire::Confirm;

use crate::cli::RmArgs;
use crate::error::{Result, StrataError};
use crate::store;

/// Run rm command
pub fn run(args: RmArgs) -> Result<()> {
    // Surface unknown names before prompting
    let image = store::images::load(&args.name)?;

    if !args.yes && !confirm_removal(&image.name)? {
        println!("Aborted.");
        return Ok(());
    }

    store::images::remove(&image.name)?;
    println!("Removed image: {}", image.name);

    Ok(())
}

fn confirm_removal(name: &str) -> Result<bool> {
    Confirm::new(&format!("Remove image '{name}'?"))
        .with_default(false)
        .with_help_message("The image's app tree and manifest are deleted; bases and layers stay")
        .prompt()
        .map_err(|e| StrataError::IoError {
            message: format!("Failed to read confirmation: {e}"),
        })
}
