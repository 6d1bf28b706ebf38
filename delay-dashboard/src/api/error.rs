//! Delay API error types.

/// Errors that can occur when loading data from the delay API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status; `message` is the response body text
    #[error("failed to fetch {resource}: status {status}: {message}")]
    Api {
        resource: &'static str,
        status: u16,
        message: String,
    },

    /// Failed to parse response JSON
    #[error("failed to decode {resource}: {message}")]
    Json {
        resource: &'static str,
        message: String,
    },

    /// The load was aborted before completion
    #[error("load cancelled")]
    Cancelled,
}
