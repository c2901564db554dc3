//! Error types for the authorization crate

use thiserror::Error;

/// Errors surfaced at the configuration edge of the crate.
///
/// Scope parsing is total and access decisions are plain booleans, so the
/// evaluator itself never fails; only loading a permission set can.
#[derive(Debug, Error)]
pub enum AuthzError {
    /// Permission set could not be deserialized
    #[error("Invalid permission set: {0}")]
    InvalidPermissions(#[from] serde_json::Error),

    /// I/O error while reading a permission set
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for authorization operations
pub type Result<T> = std::result::Result<T, AuthzError>;
