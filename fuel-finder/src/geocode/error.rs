//! Geocoding client error types.
//!
//! Internal to the module: `resolve` swallows these into `None` after
//! logging, so callers only ever see an absent coordinate.

/// Errors from the geocoding HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
