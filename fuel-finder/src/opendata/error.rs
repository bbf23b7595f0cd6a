//! Fuel-price API error types.
//!
//! These never cross the query facade: the client recovers locally by
//! truncating or emptying the result sequence and logging the cause.

/// Errors from the fuel-price API client.
#[derive(Debug, thiserror::Error)]
pub enum OpendataError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was empty
    #[error("empty response body")]
    EmptyBody,

    /// Failed to parse the response envelope
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Envelope parsed but carried no `results` array
    #[error("response has no results field")]
    MissingResults,
}
