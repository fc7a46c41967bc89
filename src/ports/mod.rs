//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RecordSource` - One fetch attempt against one stage of a fallback chain

mod record_source;

pub use record_source::{RecordSource, SourceError, SourceInfo, SourceKind};
