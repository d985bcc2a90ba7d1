//! Launch-time errors

use super::StrataError;

/// Creates a missing entry point error
pub fn entrypoint_missing(file: impl Into<String>) -> StrataError {
    StrataError::EntrypointMissing { file: file.into() }
}

/// Creates a launch failed error
pub fn failed(reason: impl Into<String>) -> StrataError {
    StrataError::LaunchFailed {
        reason: reason.into(),
    }
}
