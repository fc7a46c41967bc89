//! Fallback Loader - Resolves a record list through an ordered chain of sources.
//!
//! Each stage is tried strictly in order, and a stage is only attempted once
//! the previous one has been observed to fail. The chain ends in a terminal
//! stage that produces compiled-in records and cannot fail, so [`load`]
//! always resolves.
//!
//! # Example
//!
//! ```ignore
//! let loader = FallbackLoader::new("built-in", fallback_data::therapists)
//!     .with_source(api)
//!     .with_source(snapshot)
//!     .with_stage_timeout(Duration::from_secs(5));
//!
//! let outcome = loader.load().await;
//! println!("{} records from {}", outcome.records.len(), outcome.served_by);
//! ```
//!
//! [`load`]: FallbackLoader::load

use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::ports::{RecordSource, SourceError, SourceInfo, SourceKind};

/// Loader events for fallback monitoring.
pub mod events {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    use crate::ports::SourceInfo;

    /// Emitted when a stage fails and the next stage is about to be tried.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct SourceFallback {
        pub failed_source: SourceInfo,
        pub next_source: SourceInfo,
        pub reason: String,
        pub occurred_at: DateTime<Utc>,
    }

    impl SourceFallback {
        /// Creates a new SourceFallback event.
        pub fn new(failed: SourceInfo, next: SourceInfo, reason: impl Into<String>) -> Self {
            Self {
                failed_source: failed,
                next_source: next,
                reason: reason.into(),
                occurred_at: Utc::now(),
            }
        }
    }

    /// Emitted once a load resolves.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct RecordsLoaded {
        pub served_by: SourceInfo,
        /// Stages tried, including the one that served.
        pub attempts: usize,
        pub occurred_at: DateTime<Utc>,
    }

    impl RecordsLoaded {
        /// Creates a new RecordsLoaded event.
        pub fn new(served_by: SourceInfo, attempts: usize) -> Self {
            Self {
                served_by,
                attempts,
                occurred_at: Utc::now(),
            }
        }
    }
}

/// Callback for receiving loader events.
pub trait LoaderEventCallback: Send + Sync {
    /// Called when a stage is skipped.
    fn on_fallback(&self, event: events::SourceFallback);

    /// Called when the load resolves.
    fn on_loaded(&self, event: events::RecordsLoaded);
}

/// No-op event callback for when event tracking isn't needed.
#[derive(Debug, Clone, Copy)]
pub struct NoOpEventCallback;

impl LoaderEventCallback for NoOpEventCallback {
    fn on_fallback(&self, _event: events::SourceFallback) {}
    fn on_loaded(&self, _event: events::RecordsLoaded) {}
}

/// A stage that failed during a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageFailure {
    pub source: SourceInfo,
    pub error: SourceError,
}

/// Result of a load: the records and where they came from.
#[derive(Debug, Clone)]
pub struct LoadOutcome<T> {
    pub records: T,
    pub served_by: SourceInfo,
    /// Stages that failed before `served_by`, in order.
    pub failures: Vec<StageFailure>,
}

impl<T> LoadOutcome<T> {
    /// Returns true if the records came from the compiled-in stage.
    pub fn is_terminal_fallback(&self) -> bool {
        self.served_by.kind == SourceKind::InMemory
    }
}

/// Default per-stage time budget.
const DEFAULT_STAGE_TIMEOUT: Duration = Duration::from_secs(10);

type Terminal<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// Ordered chain of record sources ending in an infallible terminal stage.
pub struct FallbackLoader<T> {
    stages: Vec<Arc<dyn RecordSource<T>>>,
    terminal: Terminal<T>,
    terminal_info: SourceInfo,
    stage_timeout: Duration,
    event_callback: Arc<dyn LoaderEventCallback>,
}

impl<T> Clone for FallbackLoader<T> {
    fn clone(&self) -> Self {
        Self {
            stages: self.stages.clone(),
            terminal: Arc::clone(&self.terminal),
            terminal_info: self.terminal_info.clone(),
            stage_timeout: self.stage_timeout,
            event_callback: Arc::clone(&self.event_callback),
        }
    }
}

impl<T: Send + 'static> FallbackLoader<T> {
    /// Creates a loader whose only stage is the compiled-in `terminal` list.
    pub fn new(
        terminal_name: impl Into<String>,
        terminal: impl Fn() -> T + Send + Sync + 'static,
    ) -> Self {
        Self {
            stages: Vec::new(),
            terminal: Arc::new(terminal),
            terminal_info: SourceInfo::new(terminal_name, SourceKind::InMemory),
            stage_timeout: DEFAULT_STAGE_TIMEOUT,
            event_callback: Arc::new(NoOpEventCallback),
        }
    }

    /// Appends a stage, tried after every stage added before it.
    pub fn with_source(mut self, source: impl RecordSource<T> + 'static) -> Self {
        self.stages.push(Arc::new(source));
        self
    }

    /// Appends an already shared stage.
    pub fn with_shared_source(mut self, source: Arc<dyn RecordSource<T>>) -> Self {
        self.stages.push(source);
        self
    }

    /// Bounds each fallible stage; a stage exceeding it counts as unavailable.
    pub fn with_stage_timeout(mut self, stage_timeout: Duration) -> Self {
        self.stage_timeout = stage_timeout;
        self
    }

    /// Sets the event callback for receiving loader events.
    pub fn with_event_callback(mut self, callback: Arc<dyn LoaderEventCallback>) -> Self {
        self.event_callback = callback;
        self
    }

    /// Sources in the order they are tried, terminal stage last.
    pub fn chain(&self) -> Vec<SourceInfo> {
        self.stages
            .iter()
            .map(|stage| stage.source_info())
            .chain(std::iter::once(self.terminal_info.clone()))
            .collect()
    }

    /// Resolves the record list. Never fails.
    pub async fn load(&self) -> LoadOutcome<T> {
        let mut failures = Vec::new();

        for (index, stage) in self.stages.iter().enumerate() {
            let info = stage.source_info();

            let error = match timeout(self.stage_timeout, stage.fetch()).await {
                Ok(Ok(records)) => {
                    tracing::debug!("Loaded records from {}", info);
                    self.event_callback
                        .on_loaded(events::RecordsLoaded::new(info.clone(), index + 1));
                    return LoadOutcome {
                        records,
                        served_by: info,
                        failures,
                    };
                }
                Ok(Err(err)) => err,
                Err(_) => SourceError::timeout(self.stage_timeout),
            };

            let next = self
                .stages
                .get(index + 1)
                .map(|stage| stage.source_info())
                .unwrap_or_else(|| self.terminal_info.clone());

            tracing::warn!("Source {} unavailable ({}), falling back to {}", info, error, next);
            self.event_callback.on_fallback(events::SourceFallback::new(
                info.clone(),
                next,
                error.to_string(),
            ));
            failures.push(StageFailure {
                source: info,
                error,
            });
        }

        tracing::debug!("Serving compiled-in records from {}", self.terminal_info);
        self.event_callback.on_loaded(events::RecordsLoaded::new(
            self.terminal_info.clone(),
            self.stages.len() + 1,
        ));

        LoadOutcome {
            records: (self.terminal)(),
            served_by: self.terminal_info.clone(),
            failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sources::MockRecordSource;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Default)]
    struct TestEventCallback {
        fallback_count: AtomicU32,
        loaded_count: AtomicU32,
    }

    impl LoaderEventCallback for TestEventCallback {
        fn on_fallback(&self, _event: events::SourceFallback) {
            self.fallback_count.fetch_add(1, Ordering::SeqCst);
        }

        fn on_loaded(&self, _event: events::RecordsLoaded) {
            self.loaded_count.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn builtin() -> Vec<&'static str> {
        vec!["builtin-1", "builtin-2"]
    }

    fn primary(result: Result<Vec<&'static str>, SourceError>) -> MockRecordSource<Vec<&'static str>> {
        let mock = match result {
            Ok(records) => MockRecordSource::returning(records),
            Err(err) => MockRecordSource::failing(err),
        };
        mock.with_info("api", SourceKind::Network)
    }

    fn snapshot(result: Result<Vec<&'static str>, SourceError>) -> MockRecordSource<Vec<&'static str>> {
        let mock = match result {
            Ok(records) => MockRecordSource::returning(records),
            Err(err) => MockRecordSource::failing(err),
        };
        mock.with_info("snapshot", SourceKind::Snapshot)
    }

    #[tokio::test]
    async fn primary_success_skips_later_stages() {
        let api = primary(Ok(vec!["live"]));
        let snap = snapshot(Ok(vec!["static"]));
        let callback = Arc::new(TestEventCallback::default());
        let loader = FallbackLoader::new("built-in", builtin)
            .with_source(api.clone())
            .with_source(snap.clone())
            .with_event_callback(callback.clone());

        let outcome = loader.load().await;

        assert_eq!(outcome.records, vec!["live"]);
        assert_eq!(outcome.served_by.name, "api");
        assert!(outcome.failures.is_empty());
        assert_eq!(api.call_count(), 1);
        assert_eq!(snap.call_count(), 0);
        assert_eq!(callback.fallback_count.load(Ordering::SeqCst), 0);
        assert_eq!(callback.loaded_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn primary_failure_uses_snapshot() {
        let api = primary(Err(SourceError::Status { status: 502 }));
        let snap = snapshot(Ok(vec!["static"]));
        let callback = Arc::new(TestEventCallback::default());
        let loader = FallbackLoader::new("built-in", builtin)
            .with_source(api)
            .with_source(snap)
            .with_event_callback(callback.clone());

        let outcome = loader.load().await;

        assert_eq!(outcome.records, vec!["static"]);
        assert_eq!(outcome.served_by.kind, SourceKind::Snapshot);
        assert_eq!(
            outcome.failures,
            vec![StageFailure {
                source: SourceInfo::new("api", SourceKind::Network),
                error: SourceError::Status { status: 502 },
            }]
        );
        assert_eq!(callback.fallback_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn all_sources_failing_resolves_to_terminal_list() {
        let loader = FallbackLoader::new("built-in", builtin)
            .with_source(primary(Err(SourceError::network("refused"))))
            .with_source(snapshot(Err(SourceError::parse("eof"))));

        let outcome = loader.load().await;

        assert_eq!(outcome.records, builtin());
        assert!(!outcome.records.is_empty());
        assert!(outcome.is_terminal_fallback());
        assert_eq!(outcome.failures.len(), 2);
    }

    #[tokio::test]
    async fn loader_without_sources_serves_terminal_list() {
        let outcome = FallbackLoader::new("built-in", builtin).load().await;
        assert_eq!(outcome.records, builtin());
        assert_eq!(outcome.served_by, SourceInfo::new("built-in", SourceKind::InMemory));
    }

    #[tokio::test]
    async fn slow_stage_is_abandoned_after_timeout() {
        let slow = primary(Ok(vec!["late"])).with_delay(Duration::from_millis(500));
        let loader = FallbackLoader::new("built-in", builtin)
            .with_source(slow)
            .with_source(snapshot(Ok(vec!["static"])))
            .with_stage_timeout(Duration::from_millis(50));

        let outcome = loader.load().await;

        assert_eq!(outcome.records, vec!["static"]);
        assert_eq!(
            outcome.failures[0].error,
            SourceError::Timeout { timeout_ms: 50 }
        );
    }

    #[tokio::test]
    async fn stages_are_tried_sequentially() {
        let api = primary(Err(SourceError::network("refused")));
        let snap = snapshot(Err(SourceError::io("missing")));
        let loader = FallbackLoader::new("built-in", builtin)
            .with_source(api.clone())
            .with_source(snap.clone());

        loader.load().await;
        loader.load().await;

        assert_eq!(api.call_count(), 2);
        assert_eq!(snap.call_count(), 2);
    }

    #[test]
    fn chain_lists_terminal_last() {
        let loader = FallbackLoader::new("built-in", builtin)
            .with_source(primary(Ok(vec![])))
            .with_source(snapshot(Ok(vec![])));

        let names: Vec<String> = loader.chain().into_iter().map(|info| info.name).collect();
        assert_eq!(names, vec!["api", "snapshot", "built-in"]);
    }

    #[test]
    fn fallback_event_carries_reason() {
        let event = events::SourceFallback::new(
            SourceInfo::new("api", SourceKind::Network),
            SourceInfo::new("snapshot", SourceKind::Snapshot),
            "unexpected status 500",
        );

        assert_eq!(event.failed_source.name, "api");
        assert_eq!(event.next_source.kind, SourceKind::Snapshot);
        assert_eq!(event.reason, "unexpected status 500");
    }
}
