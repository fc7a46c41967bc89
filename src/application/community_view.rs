//! CommunityView - the forum screen.
//!
//! Holds the canonical board of one activation, the active category tab and
//! the displayed partition. Posting and liking patch the board in place and
//! re-derive the partition.

use std::time::Duration;

use super::lifecycle::{LoadTicket, ViewLifecycle};
use super::ViewError;
use crate::adapters::{FallbackLoader, LoadOutcome};
use crate::domain::community::{Category, CommunityBoard, CommunityFeed, CommunityPost, PostDraft};
use crate::domain::foundation::{PostId, ViewStatus};
use crate::domain::session::SessionIdentity;
use crate::ports::SourceInfo;

/// Community forum with its active category.
#[derive(Debug, Clone)]
pub struct CommunityView {
    lifecycle: ViewLifecycle,
    board: CommunityBoard,
    category: Category,
    displayed: Vec<CommunityPost>,
    served_by: Option<SourceInfo>,
    min_loading_delay: Duration,
}

impl Default for CommunityView {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunityView {
    pub fn new() -> Self {
        Self {
            lifecycle: ViewLifecycle::new("community"),
            board: CommunityBoard::new(),
            category: Category::default(),
            displayed: Vec::new(),
            served_by: None,
            min_loading_delay: Duration::ZERO,
        }
    }

    pub fn with_min_loading_delay(mut self, delay: Duration) -> Self {
        self.min_loading_delay = delay;
        self
    }

    pub fn status(&self) -> ViewStatus {
        self.lifecycle.status()
    }

    /// Loads the feed through `loader` and becomes ready.
    pub async fn activate(&mut self, loader: &FallbackLoader<CommunityFeed>) -> bool {
        let ticket = self.begin_load();
        let outcome = loader.load().await;
        if !self.min_loading_delay.is_zero() {
            tokio::time::sleep(self.min_loading_delay).await;
        }
        self.finish_load(ticket, outcome)
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.board = CommunityBoard::new();
        self.served_by = None;
        let ticket = self.lifecycle.begin();
        self.refresh();
        ticket
    }

    /// Installs a loaded feed unless `ticket` is stale.
    pub fn finish_load(&mut self, ticket: LoadTicket, outcome: LoadOutcome<CommunityFeed>) -> bool {
        if !self.lifecycle.accepts(ticket) {
            tracing::debug!(
                generation = ticket.generation(),
                source = %outcome.served_by,
                "Discarding stale community load"
            );
            return false;
        }

        tracing::debug!(
            count = outcome.records.len(),
            source = %outcome.served_by,
            "Community posts loaded"
        );
        self.board = CommunityBoard::from_feed(outcome.records);
        self.served_by = Some(outcome.served_by);
        self.lifecycle.complete();
        self.refresh();
        true
    }

    pub fn deactivate(&mut self) {
        self.lifecycle.reset();
        self.board = CommunityBoard::new();
        self.served_by = None;
        self.refresh();
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Switches the active tab.
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        self.refresh();
    }

    /// Heading of the submission form for the active tab.
    pub fn prompt(&self) -> &'static str {
        self.category.submission_prompt()
    }

    /// Posts of the active category, most recent first.
    pub fn displayed(&self) -> &[CommunityPost] {
        &self.displayed
    }

    pub fn board(&self) -> &CommunityBoard {
        &self.board
    }

    pub fn served_by(&self) -> Option<&SourceInfo> {
        self.served_by.as_ref()
    }

    /// Publishes a post under the active category and returns its id.
    ///
    /// # Errors
    ///
    /// - `NotReady` before the feed has loaded
    /// - `Validation` if the title or description is blank; nothing is added
    pub fn submit_post(
        &mut self,
        title: &str,
        description: &str,
        author: &SessionIdentity,
    ) -> Result<PostId, ViewError> {
        self.lifecycle.require_ready()?;
        let draft = PostDraft::new(title, description)?;

        let id = self.board.submit(self.category, draft, author);
        tracing::debug!(post_id = %id, category = self.category.key(), "Post submitted");
        self.refresh();
        Ok(id)
    }

    /// Adds a like to a displayed post of the active category.
    ///
    /// Returns the new like count, or `None` if the active category has no
    /// post with this id.
    pub fn like(&mut self, id: PostId) -> Result<Option<u32>, ViewError> {
        self.lifecycle.require_ready()?;

        let likes = self.board.like(self.category, id);
        if likes.is_none() {
            tracing::debug!(post_id = %id, category = self.category.key(), "Ignoring like for unknown post");
        }
        self.refresh();
        Ok(likes)
    }

    fn refresh(&mut self) {
        self.displayed = if self.lifecycle.status().is_ready() {
            self.board.partition(self.category)
        } else {
            Vec::new()
        };
    }
}
