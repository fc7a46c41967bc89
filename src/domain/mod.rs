//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, rating, view status, errors)
//! - `directory` - Therapist records, search criteria, and booking links
//! - `community` - Forum posts, categories, and the canonical post board
//! - `session` - Identity supplied by the session provider

pub mod community;
pub mod directory;
pub mod foundation;
pub mod session;
