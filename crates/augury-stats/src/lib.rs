// SPDX-FileCopyrightText: 2026 Augury Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Download statistics fetcher.
//!
//! Issues one GET against the provider's `/statistics` endpoint and decodes
//! the JSON body into [`DownloadStats`]. Every failure mode degrades to an
//! empty mapping: the statistics service being down must never block
//! artifact generation.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

use augury_core::{AuguryError, DownloadStats};

/// HTTP client for the provider statistics endpoint.
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: reqwest::Client,
    endpoint: String,
}

impl StatsClient {
    /// Creates a statistics client for the given provider hostname, sending
    /// the configured client-identifying `User-Agent` on every request.
    pub fn new(provider: &str, user_agent: &str) -> Result<Self, AuguryError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|e| {
                AuguryError::Config(format!("invalid user_agent header value: {e}"))
            })?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AuguryError::Stats {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            endpoint: format!("https://{provider}/statistics"),
        })
    }

    /// Overrides the endpoint URL (for testing with wiremock).
    #[cfg(test)]
    fn with_endpoint(mut self, url: String) -> Self {
        self.endpoint = url;
        self
    }

    /// Fetch download statistics, degrading to an empty mapping on any
    /// failure (transport error, non-success status, undecodable body).
    pub async fn fetch(&self) -> DownloadStats {
        match self.try_fetch().await {
            Ok(stats) => {
                debug!(plugins = stats.len(), "download statistics fetched");
                stats
            }
            Err(e) => {
                warn!(error = %e, "statistics unavailable, continuing with empty counts");
                DownloadStats::default()
            }
        }
    }

    async fn try_fetch(&self) -> Result<DownloadStats, AuguryError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| AuguryError::Stats {
                message: format!("request to {} failed: {e}", self.endpoint),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuguryError::Stats {
                message: format!("statistics endpoint returned {status}"),
                source: None,
            });
        }

        response
            .json::<DownloadStats>()
            .await
            .map_err(|e| AuguryError::Stats {
                message: format!("failed to decode statistics body: {e}"),
                source: Some(Box::new(e)),
            })
    }
}
