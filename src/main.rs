//! Strata - container-less image builder and launcher
//!
//! Builds runnable images from a declarative recipe (base runtime +
//! dependency manifest + project tree) with content-addressed
//! dependency-layer caching, and launches an image's fixed entry point
//! with its exit code propagated unchanged.

use clap::Parser;

mod build;
mod cli;
mod commands;
mod common;
mod config;
mod domain;
mod error;
mod hash;
mod launch;
mod operations;
mod path_utils;
mod progress;
mod store;
mod workspace;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // `run` carries the launched process's exit code; every other
    // command maps success to zero
    let result = match cli.command {
        Commands::Build(args) => {
            commands::build::run(cli.workspace, cli.verbose, args).map(|()| 0)
        }
        Commands::Run(args) => commands::run::run(cli.workspace, cli.verbose, args),
        Commands::Images(args) => commands::images::run(args).map(|()| 0),
        Commands::Show(args) => commands::show::run(cli.workspace, args).map(|()| 0),
        Commands::Rm(args) => commands::rm::run(args).map(|()| 0),
        Commands::Base(args) => commands::base::run(args).map(|()| 0),
        Commands::Cache(args) => commands::cache::run(args).map(|()| 0),
        Commands::Version => commands::version::run().map(|()| 0),
        Commands::Completions(args) => commands::completions::run(args).map(|()| 0),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
