//! Error types for the salary breakdown components.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the collector, presenter and configuration loader can hit.

use thiserror::Error;

/// A validation failure raised by the input collector before anything is published.
///
/// The display text is exactly what the user sees in the error notification.
///
/// # Example
///
/// ```
/// use salary_breakdown::error::ValidationError;
///
/// assert_eq!(
///     ValidationError::Salary.to_string(),
///     "Please enter valid salary with number format"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Neither the salary nor the super rate could be parsed.
    #[error("Please enter valid salary and superannuation rate with number format")]
    SalaryAndSuperRate,

    /// The salary is missing, unparseable or zero.
    #[error("Please enter valid salary with number format")]
    Salary,

    /// The super rate is missing or unparseable.
    #[error("Please enter valid superannuation rate with number format")]
    SuperRate,
}

/// The main error type for the salary breakdown components.
///
/// # Example
///
/// ```
/// use salary_breakdown::error::SalaryError;
///
/// let error = SalaryError::ConfigNotFound {
///     path: "/missing/calculator.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/calculator.yaml");
/// ```
#[derive(Debug, Error)]
pub enum SalaryError {
    /// User input failed validation and was not published.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The external calculation service rejected the request.
    #[error("Calculation failed: {message}")]
    RemoteCalculation {
        /// The message extracted from the failure payload.
        message: String,
    },

    /// The period divisors could not be fetched or were malformed.
    #[error("Failed to load period divisors: {message}")]
    DivisorFetch {
        /// A description of what went wrong.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return SalaryError.
pub type SalaryResult<T> = Result<T, SalaryError>;
