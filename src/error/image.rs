//! Built image errors

use super::StrataError;

/// Creates an image not found error
pub fn not_found(name: impl Into<String>) -> StrataError {
    StrataError::ImageNotFound { name: name.into() }
}

/// Creates an invalid image manifest error
pub fn manifest_invalid(name: impl Into<String>, reason: impl Into<String>) -> StrataError {
    StrataError::ImageManifestInvalid {
        name: name.into(),
        reason: reason.into(),
    }
}
