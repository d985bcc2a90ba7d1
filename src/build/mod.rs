//! The build pipeline
//!
//! Three strictly sequential steps turn a workspace recipe into one
//! committed store image: provision the base, ensure the dependency
//! layer, materialize the project tree. Each step prints one summary
//! line; the dependency line carries the `(cached)` or `(installed)`
//! marker that makes layer reuse observable.
//!
//! The image is assembled in a staging directory and swapped into the
//! store only after all steps succeeded, so a failed or interrupted
//! build leaves no artifact.

use chrono::Utc;
use console::Style;

use crate::config::{IMAGE_MANIFEST_FILE, ImageManifest};
use crate::error::Result;
use crate::hash;
use crate::store::{self, StagedDir};
use crate::workspace::Workspace;

pub mod install;
pub mod project;
pub mod provision;

pub use install::InstallOutcome;

/// Build the image described by the workspace recipe
///
/// `no_cache` forces a fresh dependency installation even when a
/// matching layer is already committed.
pub fn build_image(workspace: &Workspace, no_cache: bool, verbose: bool) -> Result<ImageManifest> {
    let recipe = &workspace.recipe;
    let step = Style::new().bold().dim();

    // Step 1: provision the base runtime
    let (base_ref, base) = provision::provision(recipe)?;
    println!(
        "{} base {} ({})",
        step.apply_to("[1/3]"),
        base_ref,
        hash::short(&base.id)
    );

    // Step 2: install dependencies, before any project file is copied,
    // so code-only rebuilds reuse the cached layer
    let outcome = install::ensure_layer(
        &base_ref,
        &base,
        &workspace.manifest_path(),
        no_cache,
        verbose,
    )?;
    let marker = if outcome.cached {
        "(cached)".to_string()
    } else {
        format!("(installed, {:.1}s)", outcome.elapsed.as_secs_f32())
    };
    println!(
        "{} dependencies {} {}",
        step.apply_to("[2/3]"),
        recipe.manifest,
        marker
    );

    // Step 3: materialize the project tree into the staged image
    let staged = StagedDir::new(store::images::image_dir(&recipe.name)?)?;
    let app = staged.path().join(store::images::APP_DIR);
    let copied = project::materialize(&workspace.project_dir(), &app)?;
    println!(
        "{} project {} ({} file{})",
        step.apply_to("[3/3]"),
        recipe.project,
        copied,
        if copied == 1 { "" } else { "s" }
    );

    let app_hash = hash::hash_tree(&app)?;
    let command_key = recipe
        .command
        .as_deref()
        .unwrap_or(&base.run)
        .join("\x1f");
    let id = hash::combine(&[&base.id, &outcome.record.id, &app_hash, &command_key]);

    let manifest = ImageManifest {
        name: recipe.name.clone(),
        id,
        base: base_ref.to_string(),
        base_id: base.id,
        layer: outcome.record.id,
        app_hash,
        entrypoint: recipe.entrypoint.clone(),
        command: recipe.command.clone(),
        created_at: Utc::now(),
    };
    manifest.save(&staged.path().join(IMAGE_MANIFEST_FILE))?;
    staged.commit()?;

    println!(
        "Built {} ({})",
        Style::new().bold().green().apply_to(&manifest.name),
        hash::short(&manifest.id)
    );

    Ok(manifest)
}
