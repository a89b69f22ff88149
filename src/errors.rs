// Copyright 2025 Cowboy AI, LLC.

//! Error types for monoid operations

use thiserror::Error;

/// Errors that can occur while constructing or combining monoid values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MonoidError {
    /// A value was built with arguments that break its invariants
    #[error("Invalid construction: {0}")]
    InvalidConstruction(String),

    /// Two quantities with different units were combined
    #[error("Unit mismatch: cannot combine {left} with {right}")]
    UnitMismatch {
        /// Unit of the left operand
        left: String,
        /// Unit of the right operand
        right: String,
    },

    /// Two structures of different size were combined
    #[error("Size mismatch: expected {left} elements, found {right}")]
    SizeMismatch {
        /// Size of the left operand
        left: usize,
        /// Size of the right operand
        right: usize,
    },

    /// Two different monoid variants were stored under the same key
    #[error("Type mismatch at '{key}': cannot append {right} to {left}")]
    TypeMismatch {
        /// Key (dotted path for nested maps) holding the values
        key: String,
        /// Variant held by the left map
        left: String,
        /// Variant held by the right map
        right: String,
    },

    /// A bucket index outside of the histogram was requested
    #[error("Index out of range: {index} is not in 0..{size}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of available buckets
        size: usize,
    },

    /// An input point fell outside of the accepted closed range
    #[error("Value out of range: {value} is not in [{min}, {max}]")]
    OutOfRange {
        /// Offending value
        value: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// An integer count or product left the range of its type
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// Two dated values were combined across different dates
    #[error("Date mismatch: cannot combine {left} with {right}")]
    DateMismatch {
        /// Date of the left operand
        left: String,
        /// Date of the right operand
        right: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for monoid operations
pub type MonoidResult<T> = Result<T, MonoidError>;

impl From<serde_json::Error> for MonoidError {
    fn from(err: serde_json::Error) -> Self {
        MonoidError::Serialization(err.to_string())
    }
}

impl MonoidError {
    /// Create an invalid construction error
    pub fn invalid(msg: impl Into<String>) -> Self {
        MonoidError::InvalidConstruction(msg.into())
    }

    /// Create an overflow error naming what overflowed
    pub fn overflow(what: impl Into<String>) -> Self {
        MonoidError::Overflow(what.into())
    }

    /// Check if this error comes from combining incompatible operands
    pub fn is_mismatch(&self) -> bool {
        matches!(
            self,
            MonoidError::UnitMismatch { .. }
                | MonoidError::SizeMismatch { .. }
                | MonoidError::TypeMismatch { .. }
                | MonoidError::DateMismatch { .. }
        )
    }

    /// Check if this error is a bounds violation
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            MonoidError::IndexOutOfRange { .. }
                | MonoidError::OutOfRange { .. }
                | MonoidError::Overflow(_)
        )
    }
}
