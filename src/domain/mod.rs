//! Domain models for Strata
//!
//! This module contains pure domain objects representing core business entities.
//! These types are free of external dependencies and contain business rules invariants.

pub mod reference;
pub mod template;

pub use reference::BaseRef;
pub use template::TemplateContext;
