//! TfL client error types.

/// Broad classes of fetch failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network error, timeout, or a non-success status from the API.
    Transport,
    /// The body couldn't be read as a list of line statuses.
    MalformedResponse,
}

/// Errors that can occur when fetching line statuses.
#[derive(Debug, thiserror::Error)]
pub enum TflError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limited by the API (usually a missing or exhausted app key)
    #[error("rate limited by TfL API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Mock data couldn't be loaded
    #[error("mock data error: {message}")]
    Mock { message: String },
}

impl TflError {
    /// Which class of failure this is.
    pub fn kind(&self) -> FailureKind {
        match self {
            TflError::Json { .. } | TflError::Mock { .. } => FailureKind::MalformedResponse,
            TflError::Http(_) | TflError::RateLimited | TflError::Api { .. } => {
                FailureKind::Transport
            }
        }
    }
}
