//! Internal error types for Met collection operations.
//!
//! These errors are internal to `artex-met` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for Met collection operations.
pub type MetResult<T> = Result<T, MetError>;

/// Errors related to Met collection API operations.
#[derive(Debug, Error)]
pub enum MetError {
    /// API request failed with an HTTP error status.
    #[error("Met API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The requested object was not found (invalid or retired id).
    #[error("Object {object_id} not found in the Met collection")]
    ObjectNotFound {
        /// The object id that was not found
        object_id: u64,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from Met API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
