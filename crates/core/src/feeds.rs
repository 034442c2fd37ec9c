use crate::error::FeedError;
use crate::models::{HomeFeed, SectionFeed};
use crate::traits::FeedSource;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const FEED_TIMEOUT: Duration = Duration::from_secs(12);

/// HTTP client for the headless CMS content API.
pub struct CmsFeedClient {
    client: Client,
    base: Url,
}

impl CmsFeedClient {
    pub fn new(base_url: &str) -> Result<Self, FeedError> {
        let base = Url::parse(base_url)?;
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base.as_str().trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, feed: &str, path: &str) -> Result<T, FeedError> {
        let response = self
            .client
            .get(self.endpoint(path))
            .header("Accept", "application/json")
            .timeout(FEED_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FeedError::FeedResponse {
                feed: feed.to_string(),
                details: response.status().to_string(),
            });
        }

        // Read the body first so a malformed payload surfaces as a
        // serialization error rather than a generic http one.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl FeedSource for CmsFeedClient {
    async fn fetch_home(&self) -> Result<HomeFeed, FeedError> {
        self.get_json("home", "/api/v1/home/").await
    }

    async fn fetch_section(&self, slug: &str) -> Result<SectionFeed, FeedError> {
        self.get_json(slug, &format!("/api/v1/sections/{slug}/")).await
    }
}
