//! Core error types.

use thiserror::Error;

/// Errors raised while building rows and filters.
///
/// Every variant is produced at construction time. Encoding a filter that was
/// built successfully never fails.
#[derive(Debug, Error)]
pub enum Error {
    /// A row key input was neither text nor a byte sequence.
    #[error("type constraint violated: expected {expected}, got {actual}")]
    TypeConstraint {
        expected: &'static str,
        actual: String,
    },

    /// An inclusivity flag was given for a range bound that is absent.
    #[error("invalid range on {bound} bound: {reason}")]
    InvalidRange {
        bound: &'static str,
        reason: &'static str,
    },

    /// A table name component is empty or malformed.
    #[error("invalid table name: {0}")]
    InvalidTableName(String),
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
