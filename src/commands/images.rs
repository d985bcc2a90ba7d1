//! Images command implementation
//!
//! Lists built images with their base, abbreviated id and age.

use console::Style;

use crate::cli::ImagesArgs;
use crate::common::display::format_age;
use crate::error::Result;
use crate::hash;
use crate::store;

/// Run images command
pub fn run(_args: ImagesArgs) -> Result<()> {
    let images = store::images::list()?;

    if images.is_empty() {
        println!("No images built.");
        println!("Run 'strata build' in a workspace to build one.");
        return Ok(());
    }

    println!("Built images ({}):", images.len());
    println!();

    for image in &images {
        println!("  {}", Style::new().bold().yellow().apply_to(&image.name));
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Id:"),
            hash::short(&image.id)
        );
        println!("    {} {}", Style::new().bold().apply_to("Base:"), image.base);
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Entry point:"),
            image.entrypoint
        );
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Created:"),
            format_age(image.created_at)
        );
        println!();
    }

    Ok(())
}
