//! Error types for the GitHub lookups.

use thiserror::Error;

/// Fixed message shown when any part of a search cycle fails.
pub const SEARCH_FAILED_MESSAGE: &str = "Unable to fetch results from GitHub.";

/// Fixed message shown when the language mapping cannot be loaded.
pub const INIT_FAILED_MESSAGE: &str = "Unable to initialize.";

/// Errors that can occur while talking to GitHub or the mapping document host.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// Transport-level failure: DNS, TLS, connection reset, and the like.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status code.
    #[error("unexpected HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    /// The body decoded, but not into the shape we expect.
    #[error("malformed response from {url}: {detail}")]
    MalformedResponse { url: String, detail: String },
}

impl FetchError {
    /// The user-facing message for a failed search cycle.
    ///
    /// Every variant collapses to the same fixed string; the detailed cause
    /// only goes to the log.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        SEARCH_FAILED_MESSAGE
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        if err.is_decode() {
            Self::MalformedResponse {
                url,
                detail: err.to_string(),
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
