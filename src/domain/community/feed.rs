//! The community document served by the snapshot and fallback sources.

use serde::{Deserialize, Serialize};

use super::{Category, CommunityPost};

/// Posts grouped by category, keyed by [`Category::key`] on the wire.
///
/// A missing key decodes to an empty partition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommunityFeed {
    #[serde(default)]
    pub currently_dealing: Vec<CommunityPost>,
    #[serde(default)]
    pub already_solved: Vec<CommunityPost>,
}

impl CommunityFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a feed from one list per category.
    pub fn with_partition(mut self, category: Category, posts: Vec<CommunityPost>) -> Self {
        *self.partition_mut(category) = posts;
        self
    }

    pub fn partition(&self, category: Category) -> &[CommunityPost] {
        match category {
            Category::CurrentlyDealing => &self.currently_dealing,
            Category::AlreadySolved => &self.already_solved,
        }
    }

    fn partition_mut(&mut self, category: Category) -> &mut Vec<CommunityPost> {
        match category {
            Category::CurrentlyDealing => &mut self.currently_dealing,
            Category::AlreadySolved => &mut self.already_solved,
        }
    }

    /// Total number of posts across both partitions.
    pub fn len(&self) -> usize {
        self.currently_dealing.len() + self.already_solved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens into category-tagged posts, partitions in [`Category::ALL`] order.
    pub fn into_tagged(self) -> Vec<(Category, CommunityPost)> {
        let CommunityFeed {
            currently_dealing,
            already_solved,
        } = self;

        currently_dealing
            .into_iter()
            .map(|post| (Category::CurrentlyDealing, post))
            .chain(
                already_solved
                    .into_iter()
                    .map(|post| (Category::AlreadySolved, post)),
            )
            .collect()
    }
}
