//! Mock Record Source for testing.
//!
//! Provides a configurable implementation of the RecordSource port so
//! loader and view tests run without a network or filesystem.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Simulated latency for timeout and stale-load testing
//! - Error injection for fallback testing
//! - Call counting for verifying strictly sequential fallback
//!
//! # Example
//!
//! ```ignore
//! let primary = MockRecordSource::failing(SourceError::Status { status: 500 });
//! let snapshot = MockRecordSource::returning(vec![therapist]);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{RecordSource, SourceError, SourceInfo, SourceKind};

/// Mock record source for testing.
#[derive(Debug, Clone)]
pub struct MockRecordSource<T> {
    /// Pre-configured outcomes (consumed in order; the last one repeats).
    responses: Arc<Mutex<VecDeque<Result<T, SourceError>>>>,
    info: SourceInfo,
    delay: Duration,
    calls: Arc<Mutex<usize>>,
}

impl<T: Clone> MockRecordSource<T> {
    /// Creates a mock with no configured outcome; fetches fail as unreachable.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: SourceInfo::new("mock", SourceKind::Network),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Creates a mock that always succeeds with `records`.
    pub fn returning(records: T) -> Self {
        Self::new().with_response(records)
    }

    /// Creates a mock that always fails with `error`.
    pub fn failing(error: SourceError) -> Self {
        Self::new().with_error(error)
    }

    /// Queues a successful fetch.
    pub fn with_response(self, records: T) -> Self {
        self.responses.lock().unwrap().push_back(Ok(records));
        self
    }

    /// Queues a failed fetch.
    pub fn with_error(self, error: SourceError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Sets simulated latency per fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the reported source info.
    pub fn with_info(mut self, name: impl Into<String>, kind: SourceKind) -> Self {
        self.info = SourceInfo::new(name, kind);
        self
    }

    /// Returns the number of fetches made against this source.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn next_response(&self) -> Result<T, SourceError> {
        let mut responses = self.responses.lock().unwrap();
        if responses.len() > 1 {
            if let Some(next) = responses.pop_front() {
                return next;
            }
        }
        responses
            .front()
            .cloned()
            .unwrap_or_else(|| Err(SourceError::network("mock source has no response")))
    }
}

impl<T: Clone> Default for MockRecordSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> RecordSource<T> for MockRecordSource<T>
where
    T: Clone + Send + 'static,
{
    async fn fetch(&self) -> Result<T, SourceError> {
        *self.calls.lock().unwrap() += 1;

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_response()
    }

    fn source_info(&self) -> SourceInfo {
        self.info.clone()
    }
}
