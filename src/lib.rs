//! Therapist Discovery - client core for finding child therapists.
//!
//! Loads therapist and community records through ordered fallback chains,
//! filters the directory by city, postal code and disorder focus, and applies
//! local edits (new posts, likes) to the community forum.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
