//! Error types for morphomath-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] morphomath_core::Error),

    /// Invalid structuring element
    #[error("invalid structuring element: {0}")]
    InvalidSel(String),

    /// Unrecognized sub-domain token
    #[error("invalid sub-domain: {0:?}, expected \"+\" or \"-\"")]
    InvalidSubDomain(String),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Invalid sequence format
    #[error("invalid sequence: {0}")]
    InvalidSequence(String),
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
