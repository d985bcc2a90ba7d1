//! Base runtime errors

use super::StrataError;

/// Creates a base not found error
pub fn not_found(reference: impl Into<String>) -> StrataError {
    StrataError::BaseNotFound {
        reference: reference.into(),
    }
}

/// Creates a base already registered error
pub fn exists(reference: impl Into<String>) -> StrataError {
    StrataError::BaseExists {
        reference: reference.into(),
    }
}

/// Creates an invalid base manifest error
pub fn manifest_invalid(reference: impl Into<String>, message: impl Into<String>) -> StrataError {
    StrataError::BaseManifestInvalid {
        reference: reference.into(),
        message: message.into(),
    }
}

/// Creates an invalid base reference error
pub fn invalid_reference(input: impl Into<String>) -> StrataError {
    StrataError::InvalidBaseReference {
        input: input.into(),
    }
}
