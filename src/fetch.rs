//! HTTP fetching with timeouts.

use std::time::Duration;

use crate::error::DocsError;

/// Default connect/read timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 1_000;

const USER_AGENT: &str = concat!("tf-docs/", env!("CARGO_PKG_VERSION"));

/// Async HTTP client for registry and documentation requests.
///
/// Connect and read timeouts are applied independently; both default to
/// [`DEFAULT_TIMEOUT_MS`]. Failures surface as [`DocsError`] and are never
/// fatal to the overall documentation request - the caller falls back to
/// local description text.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the given connect/read timeout.
    pub fn new(timeout_ms: u64) -> Result<Self, DocsError> {
        let timeout = Duration::from_millis(timeout_ms);
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DocsError::Network(e.to_string()))?;
        Ok(Self { client })
    }

    /// GET `url` and return the response body as text.
    ///
    /// Non-2xx statuses, connection failures, and timeouts each map to
    /// their own [`DocsError`] variant.
    pub async fn fetch_text(&self, url: &str) -> Result<String, DocsError> {
        tracing::debug!(url, "fetching");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocsError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
