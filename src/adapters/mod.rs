//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `sources` - Record sources (HTTP, snapshot file, mock)
//! - `loader` - Ordered fallback chain over record sources
//! - `chains` - Directory and community chains built from configuration
//! - `fallback_data` - Compiled-in records of the terminal stage

pub mod chains;
pub mod fallback_data;
pub mod loader;
pub mod sources;

pub use loader::{
    events as loader_events, FallbackLoader, LoadOutcome, LoaderEventCallback, NoOpEventCallback,
    StageFailure,
};
