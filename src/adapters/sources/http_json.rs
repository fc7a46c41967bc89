//! HTTP JSON Source - Implementation of RecordSource over a GET request.
//!
//! Serves both the live API stage (`GET /api/therapists`) and the bundled
//! static snapshot stage (`GET /data/therapists.json`). A fetch succeeds only
//! when the response has a success status *and* the body decodes into `T`.
//! The body decoder is strict by default; list stages can swap in
//! [`decode::lenient_list`] to drop individual bad records.
//!
//! # Configuration
//!
//! ```ignore
//! let api = HttpJsonSource::<Vec<TherapistRecord>>::new("http://localhost:8050/api/therapists")
//!     .named("therapists-api")
//!     .with_timeout(Duration::from_secs(5))
//!     .with_decoder(decode::lenient_list);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::decode::{self, Decoder};
use crate::ports::{RecordSource, SourceError, SourceInfo, SourceKind};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches a JSON document with a single GET request.
pub struct HttpJsonSource<T> {
    url: String,
    client: Client,
    timeout: Duration,
    info: SourceInfo,
    decoder: Decoder<T>,
}

impl<T: DeserializeOwned> HttpJsonSource<T> {
    /// Creates a network source for `url` with a fresh HTTP client.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            info: SourceInfo::new(url.clone(), SourceKind::Network),
            url,
            client: Client::new(),
            timeout: DEFAULT_TIMEOUT,
            decoder: decode::strict,
        }
    }
}

impl<T> HttpJsonSource<T> {
    /// Replaces the body decoder.
    pub fn with_decoder(mut self, decoder: Decoder<T>) -> Self {
        self.decoder = decoder;
        self
    }

    /// Shares an existing HTTP client (connection pool) with this source.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the name used in logs.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.info.name = name.into();
        self
    }

    /// Marks the source as a statically served snapshot.
    pub fn as_snapshot(mut self) -> Self {
        self.info.kind = SourceKind::Snapshot;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl<T> RecordSource<T> for HttpJsonSource<T>
where
    T: Send + 'static,
{
    async fn fetch(&self) -> Result<T, SourceError> {
        tracing::debug!("Fetching {} from {}", self.info.name, self.url);

        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SourceError::timeout(self.timeout)
                } else if e.is_connect() {
                    SourceError::network(format!("Connection failed: {}", e))
                } else {
                    SourceError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} returned {}", self.url, status);
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::timeout(self.timeout)
            } else {
                SourceError::network(format!("Failed to read body: {}", e))
            }
        })?;

        (self.decoder)(&body)
    }

    fn source_info(&self) -> SourceInfo {
        self.info.clone()
    }
}
