//! Record source adapters.
//!
//! Implementations of the RecordSource port for each kind of chain stage.
//!
//! ## Available Adapters
//!
//! - `HttpJsonSource` - GET a JSON document (live API or statically served snapshot)
//! - `CommunityApiSource` - Community feed assembled from per-category endpoints
//! - `SnapshotFileSource` - Bundled JSON snapshot read from disk
//! - `MockRecordSource` - Configurable mock for testing
//!
//! Body decoders for the JSON sources live in [`decode`].

mod community_api;
pub mod decode;
mod http_json;
mod mock;
mod snapshot_file;

pub use community_api::CommunityApiSource;
pub use decode::Decoder;
pub use http_json::HttpJsonSource;
pub use mock::MockRecordSource;
pub use snapshot_file::SnapshotFileSource;
