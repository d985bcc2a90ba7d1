//! Common utility modules for shared functionality across the codebase.

pub mod display;
pub mod fs;
pub mod path_normalizer;
