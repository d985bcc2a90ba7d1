//! Layer cache errors

use super::StrataError;

/// Creates a missing layer error
pub fn missing(id: impl Into<String>) -> StrataError {
    StrataError::LayerMissing { id: id.into() }
}
