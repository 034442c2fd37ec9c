use crate::error::FeedError;
use crate::models::{HomeFeed, SectionFeed};
use async_trait::async_trait;

/// A source of article feeds. The production implementation talks to the CMS
/// content API over HTTP; tests substitute canned or failing sources.
#[async_trait]
pub trait FeedSource {
    async fn fetch_home(&self) -> Result<HomeFeed, FeedError>;

    async fn fetch_section(&self, slug: &str) -> Result<SectionFeed, FeedError>;
}
