//! Unified error types for the GMS ecosystem
//!
//! This module provides a common error type [`GmsError`] that can represent
//! errors from any part of the system. Domain-specific error types can be
//! converted to `GmsError` for uniform error handling at API boundaries.
//!
//! # Example
//!
//! ```ignore
//! use gms_core::{GmsError, GmsResult};
//!
//! fn plan_year(path: &str) -> GmsResult<()> {
//!     let forecast = load_forecast(path)?;
//!     solve_schedule(&forecast)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Unified error type for all GMS operations.
///
/// This enum provides a common error representation for the GMS ecosystem,
/// allowing errors from I/O, parsing, solving, and validation to be handled
/// uniformly.
#[derive(Error, Debug)]
pub enum GmsError {
    /// I/O errors (file access, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing/deserialization errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Data validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Solver/algorithm errors
    #[error("Solver error: {0}")]
    Solver(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using GmsError.
pub type GmsResult<T> = Result<T, GmsError>;

// Conversion from anyhow::Error
impl From<anyhow::Error> for GmsError {
    fn from(err: anyhow::Error) -> Self {
        GmsError::Other(err.to_string())
    }
}

// Conversion from string-like types for convenience
impl From<String> for GmsError {
    fn from(s: String) -> Self {
        GmsError::Other(s)
    }
}

impl From<&str> for GmsError {
    fn from(s: &str) -> Self {
        GmsError::Other(s.to_string())
    }
}

// JSON parsing errors
impl From<serde_json::Error> for GmsError {
    fn from(err: serde_json::Error) -> Self {
        GmsError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GmsError::Solver("no feasible maintenance window".into());
        assert!(err.to_string().contains("Solver error"));
        assert!(err.to_string().contains("no feasible maintenance window"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let gms_err: GmsError = io_err.into();
        assert!(matches!(gms_err, GmsError::Io(_)));
    }

    #[test]
    fn test_anyhow_conversion() {
        let any_err = anyhow::anyhow!("workbook missing sheet");
        let gms_err: GmsError = any_err.into();
        assert!(matches!(gms_err, GmsError::Other(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn example_fn() -> GmsResult<i32> {
            Ok(42)
        }
        assert_eq!(example_fn().unwrap(), 42);
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> GmsResult<()> {
            Err(GmsError::Validation("test".into()))
        }

        fn outer() -> GmsResult<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
