//! CommunityBoard - the canonical post list and its local mutations.
//!
//! Holds every loaded post tagged with its category. New posts are
//! prepended so the list stays most-recent-first; likes are applied by
//! (category, id) lookup, never by position. Ids are only unique within a
//! category since the backend numbers each category on its own.

use super::{Category, CommunityFeed, CommunityPost, PostDraft};
use crate::domain::foundation::{PostId, PostIdGenerator};
use crate::domain::session::SessionIdentity;

/// Canonical community list owned by a single view.
#[derive(Debug, Clone, Default)]
pub struct CommunityBoard {
    entries: Vec<(Category, CommunityPost)>,
    ids: PostIdGenerator,
}

impl CommunityBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from a loaded feed.
    pub fn from_feed(feed: CommunityFeed) -> Self {
        let entries = feed.into_tagged();
        let mut ids = PostIdGenerator::new();
        if let Some(max) = entries.iter().map(|(_, post)| post.id()).max() {
            ids.reserve_through(max);
        }
        Self { entries, ids }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All posts with their category, in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (Category, &CommunityPost)> {
        self.entries.iter().map(|(category, post)| (*category, post))
    }

    /// Looks up a post by id within `category`.
    pub fn find(&self, category: Category, id: PostId) -> Option<&CommunityPost> {
        self.entries
            .iter()
            .find(|(tag, post)| *tag == category && post.id() == id)
            .map(|(_, post)| post)
    }

    /// Fresh list of the posts tagged with `category`, canonical order kept.
    pub fn partition(&self, category: Category) -> Vec<CommunityPost> {
        self.entries
            .iter()
            .filter(|(tag, _)| *tag == category)
            .map(|(_, post)| post.clone())
            .collect()
    }

    /// Prepends a new post credited to `author` and returns its id.
    pub fn submit(
        &mut self,
        category: Category,
        draft: PostDraft,
        author: &SessionIdentity,
    ) -> PostId {
        let id = self.ids.next_id();
        let post = CommunityPost::compose(id, draft, author);
        self.entries.insert(0, (category, post));
        id
    }

    /// Adds one like to the post and returns its new like count.
    ///
    /// Returns `None` and changes nothing if `category` has no post with this
    /// id. Repeated likes from the same user are all counted.
    pub fn like(&mut self, category: Category, id: PostId) -> Option<u32> {
        let (_, post) = self
            .entries
            .iter_mut()
            .find(|(tag, post)| *tag == category && post.id() == id)?;
        post.add_like();
        Some(post.likes())
    }
}
