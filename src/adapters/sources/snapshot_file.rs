//! Snapshot File Source - Reads a bundled JSON snapshot from local disk.
//!
//! Used as the static stage when the client runs without a web server in
//! front of the bundled `data/` directory.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tokio::fs;

use super::decode::{self, Decoder};
use crate::ports::{RecordSource, SourceError, SourceInfo, SourceKind};

/// Maximum snapshot size accepted (5 MB).
const MAX_SNAPSHOT_BYTES: u64 = 5 * 1024 * 1024;

/// Decodes a JSON snapshot file on every fetch.
#[derive(Debug, Clone)]
pub struct SnapshotFileSource<T> {
    path: PathBuf,
    name: String,
    decoder: Decoder<T>,
}

impl<T: DeserializeOwned> SnapshotFileSource<T> {
    /// Creates a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: path.display().to_string(),
            path,
            decoder: decode::strict,
        }
    }
}

impl<T> SnapshotFileSource<T> {
    /// Replaces the file decoder.
    pub fn with_decoder(mut self, decoder: Decoder<T>) -> Self {
        self.decoder = decoder;
        self
    }

    /// Sets the name used in logs.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl<T> RecordSource<T> for SnapshotFileSource<T>
where
    T: Send + 'static,
{
    async fn fetch(&self) -> Result<T, SourceError> {
        let metadata = fs::metadata(&self.path).await.map_err(|e| {
            SourceError::io(format!("Failed to stat {}: {}", self.path.display(), e))
        })?;

        if metadata.len() > MAX_SNAPSHOT_BYTES {
            return Err(SourceError::io(format!(
                "Snapshot {} is {} bytes, limit is {}",
                self.path.display(),
                metadata.len(),
                MAX_SNAPSHOT_BYTES
            )));
        }

        let bytes = fs::read(&self.path).await.map_err(|e| {
            SourceError::io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        (self.decoder)(&bytes)
    }

    fn source_info(&self) -> SourceInfo {
        SourceInfo::new(self.name.clone(), SourceKind::Snapshot)
    }
}
