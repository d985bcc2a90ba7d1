//! Store errors

use super::StrataError;

/// Creates a store operation failed error
pub fn operation_failed(message: impl Into<String>) -> StrataError {
    StrataError::StoreOperationFailed {
        message: message.into(),
    }
}
