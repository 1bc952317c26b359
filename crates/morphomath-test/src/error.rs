//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression test inputs
#[derive(Debug, Error)]
pub enum TestError {
    /// A signal literal could not be parsed
    #[error("failed to parse signal '{input}': {message}")]
    SignalParse { input: String, message: String },

    /// Core library error while building a function
    #[error("core error: {0}")]
    Core(#[from] morphomath_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
