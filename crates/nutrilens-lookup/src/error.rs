//! Error types for the lookup subsystem.

use thiserror::Error;

/// Errors that can occur while querying a product provider.
///
/// These never escape [`crate::ResolutionChain::resolve`]; the chain
/// consumes them as data and moves on to the next provider.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Transport-level failure (connection error, timeout, DNS)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Provider answered with a non-success HTTP status
    #[error("API error ({provider}): status {status}")]
    ApiStatus {
        /// Provider name
        provider: String,
        /// HTTP status code
        status: u16,
    },

    /// Provider response body was not the expected JSON
    #[error("failed to parse response from {provider}: {message}")]
    Parse {
        /// Provider name
        provider: String,
        /// Error message
        message: String,
    },

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
