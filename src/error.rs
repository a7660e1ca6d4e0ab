//! Error types for the estimation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only caller contract violations are represented here: missing catalog
//! rates, empty inputs, and derivation lookup misses are recoverable data
//! conditions and are surfaced as warnings or skipped entries instead.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the estimation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use fieldcost_engine::error::EngineError;
///
/// let error = EngineError::CatalogNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Catalog file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Catalog file could not be parsed.
    #[error("Failed to parse catalog file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate multiplier outside the enumerated {1.0, 0.75, 0.5} set.
    #[error("Invalid rate multiplier: {value} (expected 1.0, 0.75 or 0.5)")]
    InvalidRateMultiplier {
        /// The rejected multiplier value.
        value: Decimal,
    },

    /// An order line referenced a turnaround not present in its own test's
    /// rates list. This indicates a caller bug rather than user data.
    #[error("Test '{test_name}' has no turnaround '{turnaround_label}' in its rates list")]
    UnknownTurnaround {
        /// The name of the test the line referenced.
        test_name: String,
        /// The turnaround label that was not found.
        turnaround_label: String,
    },

    /// An input payload was invalid or contained inconsistent data.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
