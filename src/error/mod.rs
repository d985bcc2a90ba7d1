//! Error types and handling for Strata
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`recipe`]: Recipe (strata.yaml) errors
//! - [`base`]: Base runtime errors
//! - [`install`]: Dependency installation errors
//! - [`layer`]: Layer cache errors
//! - [`image`]: Built image errors
//! - [`launch`]: Launch-time errors
//! - [`store`]: Store errors
//! - [`fs`]: File system errors

#![allow(dead_code)]

// Declare submodules
pub mod base;
pub mod fs;
pub mod image;
pub mod install;
pub mod launch;
pub mod layer;
pub mod recipe;
pub mod store;

// Re-export convenience constructors from submodules
#[allow(unused_imports)]
pub use base::{
    exists as base_exists, manifest_invalid as base_manifest_invalid, not_found as base_not_found,
};
#[allow(unused_imports)]
pub use fs::{
    io_error, not_found as file_not_found, read_failed as file_read_failed,
    write_failed as file_write_failed,
};
#[allow(unused_imports)]
pub use image::{manifest_invalid as image_manifest_invalid, not_found as image_not_found};
#[allow(unused_imports)]
pub use install::{
    failed as install_failed, manifest_not_found, spawn_failed as install_spawn_failed,
};
#[allow(unused_imports)]
pub use launch::{entrypoint_missing, failed as launch_failed};
#[allow(unused_imports)]
pub use layer::missing as layer_missing;
#[allow(unused_imports)]
pub use recipe::{
    invalid as recipe_invalid, not_found as recipe_not_found, parse_failed as recipe_parse_failed,
};
#[allow(unused_imports)]
pub use store::operation_failed as store_operation_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Strata operations
#[derive(Error, Diagnostic, Debug)]
pub enum StrataError {
    // Recipe errors
    #[error("Recipe not found: {path}")]
    #[diagnostic(
        code(strata::recipe::not_found),
        help("Create a strata.yaml in the workspace root, or point --workspace at one")
    )]
    RecipeNotFound { path: String },

    #[error("Failed to parse recipe: {path}")]
    #[diagnostic(code(strata::recipe::parse_failed))]
    RecipeParseFailed { path: String, reason: String },

    #[error("Invalid recipe: {message}")]
    #[diagnostic(code(strata::recipe::invalid))]
    RecipeInvalid { message: String },

    // Base errors
    #[error("Invalid base reference: {input}")]
    #[diagnostic(
        code(strata::base::invalid_reference),
        help("Base references use the form name:tag, e.g. python:3.12")
    )]
    InvalidBaseReference { input: String },

    #[error("Base '{reference}' not found in store")]
    #[diagnostic(
        code(strata::base::not_found),
        help("Register the base with 'strata base add <name:tag> <dir>'")
    )]
    BaseNotFound { reference: String },

    #[error("Base '{reference}' already registered")]
    #[diagnostic(
        code(strata::base::exists),
        help("Remove it first with 'strata base rm <name:tag>'")
    )]
    BaseExists { reference: String },

    #[error("Invalid base manifest for '{reference}': {message}")]
    #[diagnostic(
        code(strata::base::manifest_invalid),
        help("A base directory must contain base.yaml with non-empty 'install' and 'run' commands, next to rootfs/")
    )]
    BaseManifestInvalid { reference: String, message: String },

    // Dependency installation errors
    #[error("Dependency manifest not found: {path}")]
    #[diagnostic(
        code(strata::install::manifest_missing),
        help("The recipe's 'manifest' path is resolved against the workspace root")
    )]
    ManifestNotFound { path: String },

    #[error("Dependency installation failed ({status}): {detail}")]
    #[diagnostic(
        code(strata::install::failed),
        help("The external installer reported the failure above; no layer was committed")
    )]
    InstallFailed { status: String, detail: String },

    #[error("Failed to start installer '{program}': {reason}")]
    #[diagnostic(
        code(strata::install::spawn_failed),
        help("Check that the base's install template points at an executable inside its rootfs")
    )]
    InstallSpawnFailed { program: String, reason: String },

    // Layer errors
    #[error("Dependency layer {id} is missing from the store")]
    #[diagnostic(
        code(strata::layer::missing),
        help("The cached layer was removed; run 'strata build' to recreate it")
    )]
    LayerMissing { id: String },

    // Image errors
    #[error("Image '{name}' not found")]
    #[diagnostic(
        code(strata::image::not_found),
        help("Run 'strata build' first, or list built images with 'strata images'")
    )]
    ImageNotFound { name: String },

    #[error("Invalid image manifest for '{name}': {reason}")]
    #[diagnostic(
        code(strata::image::manifest_invalid),
        help("The image directory is damaged; remove it with 'strata rm' and rebuild")
    )]
    ImageManifestInvalid { name: String, reason: String },

    // Launch errors
    #[error("Entry-point file '{file}' is missing from the image")]
    #[diagnostic(
        code(strata::launch::entrypoint_missing),
        help("The entry point must exist inside the image's app/ directory; rebuild after restoring it")
    )]
    EntrypointMissing { file: String },

    #[error("Failed to launch entry point: {reason}")]
    #[diagnostic(code(strata::launch::failed))]
    LaunchFailed { reason: String },

    // Store errors
    #[error("Store operation failed: {message}")]
    #[diagnostic(code(strata::store::operation_failed))]
    StoreOperationFailed { message: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(strata::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(strata::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(strata::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(strata::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for StrataError {
    fn from(err: std::io::Error) -> Self {
        StrataError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for StrataError {
    fn from(err: serde_yaml::Error) -> Self {
        StrataError::RecipeParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for StrataError {
    fn from(err: serde_json::Error) -> Self {
        StrataError::ImageManifestInvalid {
            name: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for StrataError {
    fn from(err: inquire::InquireError) -> Self {
        StrataError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, StrataError>;
