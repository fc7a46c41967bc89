//! Community module - Forum posts, categories, and local post mutations.

mod board;
mod category;
mod feed;
mod post;

pub use board::CommunityBoard;
pub use category::Category;
pub use feed::CommunityFeed;
pub use post::{CommunityPost, PostDraft, JUST_NOW};
