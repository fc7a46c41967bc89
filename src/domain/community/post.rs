//! Community posts and post drafts.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PostId, ValidationError};
use crate::domain::session::SessionIdentity;

/// Creation label given to posts created on this device.
pub const JUST_NOW: &str = "Just now";

/// A post in the community forum.
///
/// Only the like count changes after creation, and only through
/// [`CommunityBoard::like`](super::CommunityBoard::like).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPost {
    id: PostId,
    title: String,
    description: String,
    #[serde(default)]
    author: String,
    /// Relative-time label from the source, or [`JUST_NOW`].
    #[serde(default, rename = "timestamp")]
    created_label: String,
    #[serde(default)]
    replies: u32,
    #[serde(default)]
    likes: u32,
}

impl CommunityPost {
    /// Reconstitutes a post from stored values.
    pub fn reconstitute(
        id: PostId,
        title: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
        created_label: impl Into<String>,
        replies: u32,
        likes: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            author: author.into(),
            created_label: created_label.into(),
            replies,
            likes,
        }
    }

    /// Creates a fresh local post from a validated draft.
    pub fn compose(id: PostId, draft: PostDraft, author: &SessionIdentity) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            author: author.display_name().to_string(),
            created_label: JUST_NOW.to_string(),
            replies: 0,
            likes: 0,
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn created_label(&self) -> &str {
        &self.created_label
    }

    pub fn replies(&self) -> u32 {
        self.replies
    }

    pub fn likes(&self) -> u32 {
        self.likes
    }

    /// Initial shown in the author avatar.
    pub fn author_initial(&self) -> Option<char> {
        self.author.chars().next().map(|c| c.to_ascii_uppercase())
    }

    pub(crate) fn add_like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }
}

/// User input for a new post, trimmed and checked for blank fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
    description: String,
}

impl PostDraft {
    /// Validates the form input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if the title or description is
    /// blank after trimming.
    pub fn new(
        title: impl AsRef<str>,
        description: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }

        let description = description.as_ref().trim();
        if description.is_empty() {
            return Err(ValidationError::empty_field("description"));
        }

        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
