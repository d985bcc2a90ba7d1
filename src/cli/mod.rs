//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - build: Build command arguments
//! - run: Run command arguments
//! - images: Images command arguments
//! - show: Show command arguments
//! - rm: Rm command arguments
//! - base: Base subcommand arguments
//! - cache: Cache subcommand arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod base;
pub mod build;
pub mod cache;
pub mod completions;
pub mod images;
pub mod rm;
pub mod run;
pub mod show;

pub use base::{BaseArgs, BaseSubcommand};
pub use build::BuildArgs;
pub use cache::{CacheArgs, CacheSubcommand};
pub use completions::CompletionsArgs;
pub use images::ImagesArgs;
pub use rm::RmArgs;
pub use run::RunArgs;
pub use show::ShowArgs;

/// Strata - container-less image builder and launcher
#[derive(Parser, Debug)]
#[command(
    name = "strata",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Container-less image builder and launcher",
    long_about = "Strata builds runnable images from a declarative recipe (base runtime, \
                  dependency manifest, project tree) with content-addressed dependency-layer \
                  caching, and launches an image's fixed entry point with its exit code \
                  propagated unchanged.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  strata build                  \x1b[90m# Build the workspace recipe's image\x1b[0m\n   \
                  strata run                    \x1b[90m# Launch the workspace image\x1b[0m\n   \
                  strata run pollbot            \x1b[90m# Launch a built image by name\x1b[0m\n   \
                  strata images                 \x1b[90m# List built images\x1b[0m\n   \
                  strata base add python:3.12 ./base \x1b[90m# Register a base runtime\x1b[0m\n   \
                  strata cache                  \x1b[90m# Layer-cache statistics\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "STRATA_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the image described by the workspace recipe
    Build(BuildArgs),

    /// Launch a built image's entry point
    Run(RunArgs),

    /// List built images
    Images(ImagesArgs),

    /// Show image metadata, layers and dependencies
    Show(ShowArgs),

    /// Remove a built image
    Rm(RmArgs),

    /// Manage registered base runtimes
    Base(BaseArgs),

    /// Manage the dependency layer cache
    #[command(name = "cache")]
    Cache(CacheArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
