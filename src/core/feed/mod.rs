pub mod fetcher;
pub mod parser;
pub mod render;
pub mod types;

use fetcher::{build_client, fetch_feed, FetchError};
use parser::parse_feed_bytes;
use types::Feed;

use super::config::FetchConfig;
use super::FeedError;

/// One-shot fetch-and-parse pipeline around a client built for this invocation.
#[derive(Debug, Clone)]
pub struct FeedFetcher {
    client: reqwest::Client,
}

impl FeedFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(config)?,
        })
    }

    pub async fn fetch(&self, url: &str) -> Result<Feed, FeedError> {
        let fetched = fetch_feed(&self.client, url).await.map_err(|error| {
            tracing::debug!(url, %error, "fetch failed");
            error
        })?;
        let feed = parse_feed_bytes(&fetched.body, Some(url)).map_err(|error| {
            tracing::debug!(url, %error, "parse failed");
            error
        })?;
        tracing::debug!(
            format = ?feed.format,
            entries = feed.entries.len(),
            "parsed feed"
        );
        Ok(feed)
    }
}
