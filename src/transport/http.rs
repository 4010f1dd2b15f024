//! reqwest-backed transport with timeout and error handling.
//!
//! # Responsibilities
//! - Issue one GET per call with `Accept: application/json`
//! - Enforce the whole-exchange timeout (send, status, body)
//! - Classify failures into `FetchError`
//! - Tag each request with an `x-request-id` for correlation

use futures_util::future::BoxFuture;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::Instrument;
use url::Url;
use uuid::Uuid;

use crate::config::TimeoutConfig;
use crate::observability::metrics;
use crate::transport::error::{FetchError, FetchResult};
use crate::transport::Transport;

pub const X_REQUEST_ID: &str = "x-request-id";

/// HTTP transport for the catalog backend.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport with the configured request timeout.
    pub fn new(config: &TimeoutConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("catalog-browser/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self::with_client(client, config.request()))
    }

    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn fetch(&self, url: &Url) -> FetchResult<Value> {
        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!("fetch", %request_id, %url);
        let started = Instant::now();

        let result = async {
            tracing::debug!("Sending catalog request");
            match timeout(self.timeout, self.exchange(url, request_id)).await {
                Ok(result) => result,
                Err(_) => Err(FetchError::Timeout(self.timeout)),
            }
        }
        .instrument(span)
        .await;

        match &result {
            Ok(_) => metrics::record_fetch("ok", started),
            Err(e) => metrics::record_fetch(e.kind(), started),
        }
        result
    }

    async fn exchange(&self, url: &Url, request_id: Uuid) -> FetchResult<Value> {
        let request_id = HeaderValue::from_str(&request_id.to_string())
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(X_REQUEST_ID, request_id)
            .send()
            .await
            .map_err(FetchError::from_send)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await.map_err(FetchError::Network)?;
        tracing::debug!(status = %status, bytes = body.len(), "Catalog response received");

        Ok(serde_json::from_str(&body)?)
    }
}

impl Transport for HttpTransport {
    fn get_json<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, FetchResult<Value>> {
        Box::pin(self.fetch(url))
    }
}
