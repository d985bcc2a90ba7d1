//! Base provisioning, the first build step
//!
//! Resolves the recipe's `name:tag` reference against the registered
//! bases. The stored base is immutable, which is what makes the
//! starting filesystem of every build reproducible.

use crate::config::{BaseManifest, Recipe};
use crate::domain::BaseRef;
use crate::error::Result;
use crate::store;

/// Resolve the recipe's base reference to a registered base
pub fn provision(recipe: &Recipe) -> Result<(BaseRef, BaseManifest)> {
    let reference = recipe.base_ref()?;
    let manifest = store::bases::load(&reference)?;
    Ok((reference, manifest))
}
