//! Error types for the contribution calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! fetching reference data, or calculating contributions.

use thiserror::Error;

/// The main error type for the contribution calculator.
///
/// Input errors reject a request outright. Reference fetch errors never reach
/// API callers: the reference data provider turns them into an explanatory
/// message on [`crate::models::ReferenceData`].
///
/// # Example
///
/// ```
/// use b2b_contributions::error::EngineError;
///
/// let error = EngineError::UnknownRegime {
///     value: "ryczalt_3".to_string(),
/// };
/// assert_eq!(error.to_string(), "Nieprawidłowa forma opodatkowania: ryczalt_3");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A calculation input field was out of range.
    #[error("{message}")]
    InvalidInput {
        /// The request field that was invalid.
        field: String,
        /// A user-facing description of the problem.
        message: String,
    },

    /// The tax regime is not one the income tax rules know about.
    #[error("Nieprawidłowa forma opodatkowania: {value}")]
    UnknownRegime {
        /// The regime string as received.
        value: String,
    },

    /// The reference page could not be retrieved.
    #[error("Error fetching reference data from {url}: {message}")]
    ReferenceFetch {
        /// The URL that was requested.
        url: String,
        /// A description of the transport or status failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Returns true for errors caused by the caller's input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidInput { .. } | EngineError::UnknownRegime { .. }
        )
    }
}
