//! Command implementations for Strata CLI

pub mod base;
pub mod build;
pub mod cache;
pub mod completions;
pub mod helpers;
pub mod images;
pub mod rm;
pub mod run;
pub mod show;
pub mod version;
