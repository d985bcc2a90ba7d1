//! High-level operations behind the CLI commands
//!
//! Each operation owns the workflow for one command: resolving the
//! workspace, driving the build pipeline or the launcher, and printing
//! the user-facing summary.

pub mod build;
pub mod run;

pub use build::BuildOperation;
pub use run::RunOperation;
