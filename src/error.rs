//! Error types for the documentation pipeline.

use thiserror::Error;

/// Errors that can occur while resolving, fetching, or parsing documentation.
///
/// All variants are caught at the [`DocsProvider`](crate::DocsProvider)
/// boundary and converted into local fallback text; they never reach the
/// end caller of the high-level API.
#[derive(Error, Debug)]
pub enum DocsError {
    /// Connection failure or other transport-level error.
    #[error("network error: {0}")]
    Network(String),

    /// The connect or read timeout elapsed before the response arrived.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The server answered with a non-success status code.
    #[error("HTTP {status} fetching {url}")]
    Status { status: u16, url: String },

    /// The registry returned JSON that does not match the expected shape.
    #[error("failed to parse registry response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Failed to read a local file (lock file, model data).
    #[error("failed to read: {0}")]
    Io(#[from] std::io::Error),

    /// No provider could be determined for the requested identifier.
    #[error("no provider could be determined: {0}")]
    Resolution(String),
}

impl From<reqwest::Error> for DocsError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest reports both connect and read timeouts through is_timeout();
        // keep them distinct from ordinary transport failures.
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
