//! Base command implementation
//!
//! Registering a base is the local equivalent of pulling a versioned
//! runtime image: the rootfs is copied into the store, hashed, and
//! becomes the immutable starting filesystem for builds.

use console::Style;

use crate::cli::{BaseArgs, BaseSubcommand};
use crate::common::display::format_size;
use crate::domain::BaseRef;
use crate::error::Result;
use crate::hash;
use crate::store;

/// Run base command
pub fn run(args: BaseArgs) -> Result<()> {
    match args.command {
        BaseSubcommand::Add(add) => {
            let reference = BaseRef::parse(&add.reference)?;
            let manifest = store::bases::add(&reference, &add.dir)?;
            println!(
                "Registered base {} ({})",
                Style::new().bold().green().apply_to(reference.to_string()),
                hash::short(&manifest.id)
            );
        }
        BaseSubcommand::List => list_bases()?,
        BaseSubcommand::Rm(rm) => {
            let reference = BaseRef::parse(&rm.reference)?;
            store::bases::remove(&reference)?;
            println!("Removed base: {reference}");
        }
    }

    Ok(())
}

fn list_bases() -> Result<()> {
    let bases = store::bases::list()?;

    if bases.is_empty() {
        println!("No bases registered.");
        println!("Run 'strata base add <name:tag> <dir>' to register one.");
        return Ok(());
    }

    println!("Registered bases ({}):", bases.len());
    for base in &bases {
        let reference = format!("{}:{}", base.name, base.tag);
        let rootfs = store::bases::rootfs_dir(&BaseRef::parse(&reference)?)?;
        println!(
            "  {} ({}, {})",
            Style::new().bold().yellow().apply_to(&reference),
            hash::short(&base.id),
            format_size(dir_size(&rootfs)),
        );
    }

    Ok(())
}

fn dir_size(path: &std::path::Path) -> u64 {
    walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}
