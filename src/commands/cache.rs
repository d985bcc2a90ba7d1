//! Cache command implementation
//!
//! Statistics, listing and clearing for the dependency layer cache.
//! Clearing never touches bases or built images; a cleared layer only
//! surfaces on the next `strata run` as a rebuild hint.

use crate::cli::{CacheArgs, CacheSubcommand};
use crate::common::display::format_age;
use crate::error::{Result, StrataError};
use crate::hash;
use crate::store;

/// Run cache command
pub fn run(args: CacheArgs) -> Result<()> {
    if let Some(command) = args.command {
        match command {
            CacheSubcommand::List => {
                list_layers()?;
                return Ok(());
            }
            CacheSubcommand::Clear(clear_args) => {
                if let Some(id) = clear_args.only {
                    clear_one_layer(&id)?;
                } else {
                    clear_all_layers()?;
                }
                return Ok(());
            }
        }
    }

    // Default: show only cache statistics
    show_cache_stats()?;

    Ok(())
}

fn show_cache_stats() -> Result<()> {
    let stats = store::store_stats()?;

    println!("Layer cache statistics:");
    println!("  Location: {}", store::layers_dir()?.display());
    println!("  Layers: {}", stats.layers);
    println!("  Size: {}", stats.formatted_layers_size());

    if stats.layers == 0 {
        println!("\nLayer cache is empty.");
    } else {
        println!("\nRun 'strata cache list' to list cached layers.");
        println!("Run 'strata cache clear' to remove everything from the cache.");
        println!("Run 'strata cache clear --only <layer-id>' to remove a specific layer.");
    }

    Ok(())
}

fn list_layers() -> Result<()> {
    let layers = store::layers::list()?;

    if layers.is_empty() {
        println!("No cached layers.");
        return Ok(());
    }

    println!("Cached layers ({}):", layers.len());
    for layer in &layers {
        println!(
            "  {} (base {}, {})",
            hash::short(&layer.id),
            layer.base,
            format_age(layer.created_at)
        );
    }

    Ok(())
}

fn clear_all_layers() -> Result<()> {
    let removed = store::layers::clear()?;
    println!(
        "Cleared {} layer{}.",
        removed,
        if removed == 1 { "" } else { "s" }
    );
    Ok(())
}

/// Remove one layer by full or abbreviated id
fn clear_one_layer(id: &str) -> Result<()> {
    let matches: Vec<String> = store::layers::list()?
        .into_iter()
        .map(|l| l.id)
        .filter(|full| full.starts_with(id))
        .collect();

    match matches.as_slice() {
        [full] => {
            store::layers::remove(full)?;
            println!("Removed layer: {}", hash::short(full));
            Ok(())
        }
        [] => Err(StrataError::LayerMissing { id: id.to_string() }),
        _ => Err(StrataError::StoreOperationFailed {
            message: format!("layer id '{id}' is ambiguous, use more characters"),
        }),
    }
}
