//! Community API Source - Assembles the community feed from the backend.
//!
//! The backend serves one list per category at
//! `GET {base}/api/community/<category>`. The stage only succeeds when
//! every category could be fetched, so a partial outage falls through to
//! the snapshot instead of showing a half-empty forum.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::HttpJsonSource;
use crate::domain::community::{Category, CommunityFeed, CommunityPost};
use crate::ports::{RecordSource, SourceError, SourceInfo, SourceKind};

/// Networked community stage built from per-category endpoints.
pub struct CommunityApiSource {
    partitions: Vec<(Category, HttpJsonSource<Vec<CommunityPost>>)>,
}

impl CommunityApiSource {
    /// Creates a source for the backend rooted at `base_url`.
    pub fn new(base_url: &str, client: Client, timeout: Duration) -> Self {
        let base = base_url.trim_end_matches('/');
        let partitions = Category::ALL
            .into_iter()
            .map(|category| {
                let source = HttpJsonSource::new(format!("{}/api/community/{}", base, category.key()))
                    .with_client(client.clone())
                    .with_timeout(timeout)
                    .named(format!("community-api/{}", category.key()));
                (category, source)
            })
            .collect();

        Self { partitions }
    }
}

#[async_trait]
impl RecordSource<CommunityFeed> for CommunityApiSource {
    async fn fetch(&self) -> Result<CommunityFeed, SourceError> {
        let mut feed = CommunityFeed::new();
        for (category, source) in &self.partitions {
            let posts = source.fetch().await?;
            feed = feed.with_partition(*category, posts);
        }
        Ok(feed)
    }

    fn source_info(&self) -> SourceInfo {
        SourceInfo::new("community-api", SourceKind::Network)
    }
}
