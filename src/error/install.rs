//! Dependency installation errors

use super::StrataError;

/// Creates a dependency manifest not found error
pub fn manifest_not_found(path: impl Into<String>) -> StrataError {
    StrataError::ManifestNotFound { path: path.into() }
}

/// Creates an installation failed error
pub fn failed(status: impl Into<String>, detail: impl Into<String>) -> StrataError {
    StrataError::InstallFailed {
        status: status.into(),
        detail: detail.into(),
    }
}

/// Creates an installer spawn failed error
pub fn spawn_failed(program: impl Into<String>, reason: impl Into<String>) -> StrataError {
    StrataError::InstallSpawnFailed {
        program: program.into(),
        reason: reason.into(),
    }
}
