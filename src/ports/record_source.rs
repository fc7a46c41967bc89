//! Record Source Port - One stage of a record loader's fallback chain.
//!
//! A source performs a single fetch attempt. Every failure is reported as a
//! [`SourceError`], which the loader treats as "this source is unavailable"
//! and answers by moving on to the next stage. Source errors are never
//! surfaced to the user.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct Fixed(Vec<TherapistRecord>);
//!
//! #[async_trait]
//! impl RecordSource<Vec<TherapistRecord>> for Fixed {
//!     async fn fetch(&self) -> Result<Vec<TherapistRecord>, SourceError> {
//!         Ok(self.0.clone())
//!     }
//!
//!     fn source_info(&self) -> SourceInfo {
//!         SourceInfo::new("fixed", SourceKind::InMemory)
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Port for one data source of a fallback chain.
#[async_trait]
pub trait RecordSource<T>: Send + Sync {
    /// Makes one attempt to produce the full record set.
    async fn fetch(&self) -> Result<T, SourceError>;

    /// Describes the source for logs and load outcomes.
    fn source_info(&self) -> SourceInfo;
}

/// Where a chain stage gets its data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Live service endpoint.
    Network,
    /// Bundled JSON snapshot, served statically or read from disk.
    Snapshot,
    /// Records compiled into the application.
    InMemory,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SourceKind::Network => "network",
            SourceKind::Snapshot => "snapshot",
            SourceKind::InMemory => "in-memory",
        };
        write!(f, "{}", s)
    }
}

/// Name and kind of a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub name: String,
    pub kind: SourceKind,
}

impl SourceInfo {
    pub fn new(name: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

impl fmt::Display for SourceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// Reasons a source could not produce data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Transport failure: connection refused, DNS, reset.
    #[error("network error: {0}")]
    Network(String),

    /// No answer within the allowed time.
    #[error("timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout.
        timeout_ms: u64,
    },

    /// The server answered with a non-success status.
    #[error("unexpected status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The body was not the expected JSON document.
    #[error("parse error: {0}")]
    Parse(String),

    /// Local resource could not be read.
    #[error("io error: {0}")]
    Io(String),
}

impl SourceError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates an io error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a timeout error.
    pub fn timeout(timeout: std::time::Duration) -> Self {
        Self::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        }
    }
}
