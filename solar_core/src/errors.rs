//! # Error Types
//!
//! Structured error types for solar_core. Every calculator validates its
//! input up front and either returns a complete result or one of these
//! errors; there are no partial results.
//!
//! ## Example
//!
//! ```rust
//! use solar_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(panel_width_mm: f64) -> CalcResult<()> {
//!     if panel_width_mm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "panel_width_mm".to_string(),
//!             value: panel_width_mm.to_string(),
//!             reason: "Panel width must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for solar_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// None of these are retryable: the caller has to obtain corrected input
/// and invoke the calculator again.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, non-finite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Racking system identifier not present in the catalog
    #[error("Unknown racking system: {id}")]
    UnknownSystem { id: String },

    /// File I/O error (reading an input document)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownSystem error
    pub fn unknown_system(id: impl Into<String>) -> Self {
        CalcError::UnknownSystem { id: id.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownSystem { .. } => "UNKNOWN_SYSTEM",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }

    /// The input field this error points at, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. } | CalcError::MissingField { field } => Some(field.as_str()),
            CalcError::UnknownSystem { .. } | CalcError::FileError { .. } | CalcError::SerializationError { .. } => {
                None
            }
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        // serde reports an absent field as "missing field `name`"
        if e.classify() == serde_json::error::Category::Data {
            let message = e.to_string();
            if let Some(field) = message
                .strip_prefix("missing field `")
                .and_then(|rest| rest.split('`').next())
            {
                return CalcError::missing_field(field);
            }
        }
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

/// Require a length (or voltage) to be finite and strictly positive.
pub(crate) fn require_positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

/// Require a value to be a finite number; sign is not checked.
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    Ok(())
}

/// Require a count to be at least one.
pub(crate) fn require_count(field: &str, value: u32, reason: &str) -> CalcResult<()> {
    if value == 0 {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

/// Convert a rounded-up piece count to `u32`, rejecting values that do not fit.
pub(crate) fn count_from_f64(field: &str, input: f64, count: f64) -> CalcResult<u32> {
    if !count.is_finite() || count < 0.0 || count > u32::MAX as f64 {
        return Err(CalcError::invalid_input(
            field,
            input.to_string(),
            "Value is too large to produce a countable result",
        ));
    }
    Ok(count as u32)
}

/// Multiply two counts, rejecting a product that overflows `u32`.
pub(crate) fn checked_count(field: &str, input: u32, a: u32, b: u32) -> CalcResult<u32> {
    a.checked_mul(b)
        .ok_or_else(|| CalcError::invalid_input(field, input.to_string(), "Count is too large"))
}
