//! Show command implementation
//!
//! Prints one image's manifest, its layer and the dependency entries
//! the layer was installed from (parsed out of the manifest snapshot
//! stored with the layer).

use std::path::PathBuf;

use console::Style;

use crate::cli::ShowArgs;
use crate::common::display::format_age;
use crate::config::dependencies::parse_manifest;
use crate::error::Result;
use crate::hash;
use crate::store;
use crate::workspace::Workspace;

use super::helpers::resolve_start_dir;

/// Run show command
pub fn run(workspace: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let name = match args.name {
        Some(name) => name,
        None => {
            let start = resolve_start_dir(workspace)?;
            Workspace::discover(&start)?.recipe.name
        }
    };

    let image = store::images::load(&name)?;

    println!("{}", Style::new().bold().yellow().apply_to(&image.name));
    println!("  {} {}", Style::new().bold().apply_to("Id:"), image.id);
    println!("  {} {} ({})", Style::new().bold().apply_to("Base:"), image.base, hash::short(&image.base_id));
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Layer:"),
        hash::short(&image.layer)
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Entry point:"),
        image.entrypoint
    );
    if let Some(command) = &image.command {
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Command:"),
            command.join(" ")
        );
    }
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Created:"),
        format_age(image.created_at)
    );

    show_dependencies(&image.layer);

    Ok(())
}

/// List the dependency entries behind the image's layer
///
/// A cleared layer just drops this section; show never fails over a
/// missing cache entry.
fn show_dependencies(layer_id: &str) {
    let Ok(snapshot) = store::layers::manifest_snapshot(layer_id) else {
        return;
    };

    let entries = parse_manifest(&snapshot);
    if entries.is_empty() {
        return;
    }

    println!("  {}", Style::new().bold().apply_to("Dependencies:"));
    for entry in &entries {
        match &entry.constraint {
            Some(constraint) => println!("    {} {}", entry.name, constraint),
            None => println!("    {}", entry.name),
        }
    }
}
