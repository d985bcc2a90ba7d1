use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arguments for base command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Register a base runtime:\n    strata base add python:3.12 ./python-base\n\n\
                  List registered bases:\n    strata base list\n\n\
                  Remove a base:\n    strata base rm python:3.12")]
pub struct BaseArgs {
    #[command(subcommand)]
    pub command: BaseSubcommand,
}

/// Base subcommands
#[derive(Subcommand, Debug)]
pub enum BaseSubcommand {
    /// Register a base runtime from a directory containing base.yaml and rootfs/
    Add(AddBaseArgs),

    /// List registered bases
    List,

    /// Remove a registered base
    Rm(RmBaseArgs),
}

/// Arguments for base add command
#[derive(Parser, Debug)]
pub struct AddBaseArgs {
    /// Base reference in name:tag form (e.g. python:3.12)
    pub reference: String,

    /// Source directory containing base.yaml and rootfs/
    pub dir: PathBuf,
}

/// Arguments for base rm command
#[derive(Parser, Debug)]
pub struct RmBaseArgs {
    /// Base reference in name:tag form
    pub reference: String,
}
