//! Blocking HTTP client for the swarm metrics endpoint.
//!
//! Uses `reqwest::blocking` so it can be driven from a background
//! `std::thread` without an async runtime.

use std::time::Duration;

use gd_api_types::MetricsSnapshot;
use thiserror::Error;

/// Where the metrics server listens unless `--api` says otherwise.
pub const DEFAULT_METRICS_URL: &str = "http://localhost:8000/metrics";

/// Everything that can go wrong on one poll. All variants are non-fatal:
/// the poll loop logs them and tries again on the next tick.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid metrics body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Reusable blocking client + metrics URL.
pub struct MetricsClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl MetricsClient {
    pub fn new(url: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self {
            client,
            url: url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One `GET` against the metrics endpoint. A field with the wrong JSON
    /// type fails the decode and is reported the same way as a non-JSON body.
    pub fn fetch_metrics(&self) -> Result<MetricsSnapshot, FetchError> {
        let resp = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .map_err(FetchError::Transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        resp.json::<MetricsSnapshot>().map_err(FetchError::Decode)
    }
}
