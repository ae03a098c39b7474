//! Backend client error types.

/// Errors from the route backend HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    ///
    /// `message` is the human-readable reason from the response body, or a
    /// generic one if the body carried none.
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
