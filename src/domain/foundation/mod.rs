//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, lifecycle enums, and error types
//! shared by the directory and community domains.

mod errors;
mod ids;
mod rating;
mod state_machine;
mod view_status;

pub use errors::ValidationError;
pub use ids::{PostId, PostIdGenerator, TherapistId};
pub use rating::Rating;
pub use state_machine::StateMachine;
pub use view_status::ViewStatus;
