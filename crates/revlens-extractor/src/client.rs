//! HTTP client for the single bounded page fetch.

use std::time::Duration;

use reqwest::Client;

use revlens_core::ReviewRecord;

use crate::error::ExtractError;
use crate::parse::parse_reviews;

/// Fetches product pages and extracts their reviews.
///
/// One outbound GET per [`extract`](PageFetcher::extract) call, bounded by
/// the configured timeout. No retries: a failed fetch means an empty
/// result for this run, and the caller's fallback policy takes over.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a `PageFetcher` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Extracts review records from the page at `url`.
    ///
    /// Never errors: transport failures, non-2xx responses, and markup
    /// mismatches all degrade to an empty vec after a logged warning.
    /// Records are returned in document order.
    pub async fn extract(&self, url: &str) -> Vec<ReviewRecord> {
        match self.fetch_page(url).await {
            Ok(body) => parse_reviews(&body),
            Err(e) => {
                tracing::warn!(url, error = %e, "page fetch failed, returning no reviews");
                Vec::new()
            }
        }
    }

    /// Fetches the raw page body.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::Http`] — DNS, connection, TLS, or timeout failure.
    /// - [`ExtractError::UnexpectedStatus`] — any non-2xx response.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ExtractError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ExtractError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
