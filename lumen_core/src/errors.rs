//! # Error Types
//!
//! Structured error types for lumen_core. The calculation pipeline itself
//! never fails (degenerate numeric inputs produce conservative zeros), so
//! these errors only arise at the boundaries: parsing a manual utilization
//! factor literal and batch table I/O.
//!
//! ## Example
//!
//! ```rust
//! use lumen_core::errors::{LumenError, LumenResult};
//!
//! fn parse_tariff(raw: &str) -> LumenResult<f64> {
//!     raw.parse().map_err(|_| LumenError::parse_error("tariff", raw))
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for lumen_core operations
pub type LumenResult<T> = Result<T, LumenError>;

/// Structured error type for estimator operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by front ends.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum LumenError {
    /// A textual value could not be interpreted (e.g., a manual UF literal)
    #[error("Cannot parse '{field}': '{value}' is not a valid value")]
    ParseError { field: String, value: String },

    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Batch table I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl LumenError {
    /// Create a ParseError
    pub fn parse_error(field: impl Into<String>, value: impl Into<String>) -> Self {
        LumenError::ParseError {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        LumenError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        LumenError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            LumenError::ParseError { .. } => "PARSE_ERROR",
            LumenError::InvalidInput { .. } => "INVALID_INPUT",
            LumenError::FileError { .. } => "FILE_ERROR",
            LumenError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
