//! Error types for port operations.

use std::path::PathBuf;

/// Scene persistence errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// Storage operation failed - includes operation name for tracing.
    #[error("Storage error in {operation}: {message}")]
    Storage {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PersistenceError {
    /// Create a Storage error with operation context.
    pub fn storage(operation: &'static str, message: impl ToString) -> Self {
        Self::Storage {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

/// Errors from the asset store. These never abort an import; the affected
/// row is recorded and skipped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadError {
    #[error("Local asset unreadable at {path}: {message}")]
    SourceUnreadable { path: PathBuf, message: String },
    #[error("Upload of {asset_file} rejected: {message}")]
    Rejected { asset_file: String, message: String },
}

impl UploadError {
    pub fn rejected(asset_file: impl Into<String>, message: impl ToString) -> Self {
        Self::Rejected {
            asset_file: asset_file.into(),
            message: message.to_string(),
        }
    }
}
