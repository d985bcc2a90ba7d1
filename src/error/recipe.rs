//! Recipe errors

use super::StrataError;

/// Creates a recipe not found error
pub fn not_found(path: impl Into<String>) -> StrataError {
    StrataError::RecipeNotFound { path: path.into() }
}

/// Creates a recipe parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> StrataError {
    StrataError::RecipeParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid recipe error
pub fn invalid(message: impl Into<String>) -> StrataError {
    StrataError::RecipeInvalid {
        message: message.into(),
    }
}
