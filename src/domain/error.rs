//! Error types for the zatlas plugin.
//!
//! This module defines [`AtlasError`] and the [`Result`] alias used across the
//! crate. Only the dataset load boundary and configuration loading can fail;
//! the filter/sort pipeline itself is infallible.

use thiserror::Error;

/// The main error type for zatlas operations.
///
/// Every variant that reaches the user is rendered through its `Display`
/// implementation as the single "load failed" message of the error screen.
///
/// # Examples
///
/// ```
/// use zatlas::AtlasError;
///
/// let err = AtlasError::Http { status: 503 };
/// assert_eq!(err.to_string(), "Dataset request failed with HTTP status 503");
/// ```
#[derive(Debug, Error)]
pub enum AtlasError {
    /// The dataset endpoint answered with a non-success status code.
    #[error("Dataset request failed with HTTP status {status}")]
    Http {
        /// HTTP status code reported by the host.
        status: u16,
    },

    /// The request never produced an HTTP response.
    ///
    /// Zellij reports transport failures (DNS, TLS, connection refused) as a
    /// result with status `0` and the error text as the body.
    #[error("Dataset request failed: {0}")]
    Transport(String),

    /// The response body is not a JSON array of country records.
    #[error("Dataset response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response parsed, but no record in it was usable.
    #[error("Dataset contained no usable country records ({rejected} rejected)")]
    EmptyDataset {
        /// Number of records rejected during validation.
        rejected: usize,
    },

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for zatlas operations.
pub type Result<T> = std::result::Result<T, AtlasError>;
