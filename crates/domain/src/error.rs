//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing adapters to use String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// File extension does not name a supported 3D asset format
    #[error("Unsupported asset type: {extension:?}")]
    UnsupportedAssetType { extension: String },
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when domain invariants are violated:
    /// - Required fields are empty or missing
    /// - Numeric values are not finite
    ///
    /// # Example
    /// ```ignore
    /// if mesh_name.is_empty() {
    ///     return Err(DomainError::validation("Mesh name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Create an unsupported asset type error
    pub fn unsupported_asset_type(extension: impl Into<String>) -> Self {
        Self::UnsupportedAssetType {
            extension: extension.into(),
        }
    }
}
