//! Application layer - the directory and community views.
//!
//! Each view owns the canonical list of its current activation, runs the
//! fallback loader, and re-derives its displayed list whenever the records,
//! the criteria, or the active category change.

mod community_view;
mod directory_view;
mod errors;
mod lifecycle;

pub use community_view::CommunityView;
pub use directory_view::DirectoryView;
pub use errors::ViewError;
pub use lifecycle::LoadTicket;
