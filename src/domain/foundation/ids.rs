//! Strongly-typed identifier value objects.
//!
//! Record identifiers arrive as JSON numbers from every source, so both
//! identifiers wrap a `u64` rather than a UUID.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Stable identifier of a therapist record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TherapistId(u64);

impl TherapistId {
    /// Creates a TherapistId from its numeric value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TherapistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TherapistId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Identifier of a community post.
///
/// Posts loaded from a source keep the source's id. Posts created locally
/// get an id from [`PostIdGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    /// Creates a PostId from its numeric value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Hands out post ids derived from the creation time in epoch milliseconds.
///
/// Ids are strictly increasing for the lifetime of the generator, even when
/// two posts are created within the same millisecond or the clock steps back.
#[derive(Debug, Clone, Default)]
pub struct PostIdGenerator {
    last: u64,
}

impl PostIdGenerator {
    /// Creates a generator with no issued ids.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures every future id is greater than `id`.
    ///
    /// Called with the largest id of a freshly loaded list so local posts
    /// never collide with source posts.
    pub fn reserve_through(&mut self, id: PostId) {
        self.last = self.last.max(id.value());
    }

    /// Issues an id for a post created now.
    pub fn next_id(&mut self) -> PostId {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now)
    }

    /// Issues an id for a post created at `epoch_millis`.
    pub fn next_at(&mut self, epoch_millis: u64) -> PostId {
        let id = epoch_millis.max(self.last.saturating_add(1));
        self.last = id;
        PostId(id)
    }
}
