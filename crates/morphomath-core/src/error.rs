//! Error types for morphomath-core
//!
//! Every variant is a precondition violation detected at the call site.
//! The computations themselves are pure and deterministic, so none of these
//! errors is transient.

use thiserror::Error;

/// Morphomath core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Domain bounds are reversed
    #[error("invalid domain: inf {inf} > sup {sup}")]
    InvalidDomain { inf: i64, sup: i64 },

    /// Empty input where at least one value is required
    #[error("empty input: a function needs at least one value")]
    EmptyInput,

    /// Value buffer length does not match the domain size
    #[error("length mismatch: domain holds {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Binary operation on functions defined over different domains
    #[error("domain mismatch: [{}, {}] vs [{}, {}]", .expected.0, .expected.1, .actual.0, .actual.1)]
    DomainMismatch {
        expected: (i64, i64),
        actual: (i64, i64),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for morphomath core operations
pub type Result<T> = std::result::Result<T, Error>;
