//! Community forum partitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Top-level partition of the community forum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Parents asking for help with an ongoing challenge.
    #[default]
    CurrentlyDealing,
    /// Parents sharing what worked for them.
    AlreadySolved,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::CurrentlyDealing, Category::AlreadySolved];

    /// Key used by the snapshot document and the community API path.
    pub fn key(&self) -> &'static str {
        match self {
            Category::CurrentlyDealing => "currently_dealing",
            Category::AlreadySolved => "already_solved",
        }
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::CurrentlyDealing => "Currently Dealing",
            Category::AlreadySolved => "Already Solved",
        }
    }

    /// Heading of the submission form.
    pub fn submission_prompt(&self) -> &'static str {
        match self {
            Category::CurrentlyDealing => "Share your current challenge",
            Category::AlreadySolved => "Share your success story",
        }
    }

    /// Badge shown on every post of this partition.
    pub fn badge(&self) -> &'static str {
        match self {
            Category::CurrentlyDealing => "Seeking Help",
            Category::AlreadySolved => "Success Story",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(|c: char| c == ' ' || c == '-', "_");
        Category::ALL
            .into_iter()
            .find(|category| category.key() == normalized)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "category",
                    format!("expected currently_dealing or already_solved, got '{}'", s),
                )
            })
    }
}
