//! Session module - The signed-in user as seen by the client core.

mod identity;

pub use identity::SessionIdentity;
