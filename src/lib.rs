pub mod cli;
pub mod core;

use std::io::Write;

pub use crate::core::config::FetchConfig;
pub use crate::core::feed::render::{render, write_feed};
pub use crate::core::feed::types::{Entry, Feed, FeedFormat};
pub use crate::core::feed::FeedFetcher;
pub use crate::core::FeedError;

/// Fetches `url` and writes its text rendering to `out`.
///
/// Nothing is written unless the whole document was fetched and parsed.
pub async fn run<W: Write>(url: &str, config: &FetchConfig, out: W) -> Result<(), FeedError> {
    let fetcher = FeedFetcher::new(config)?;
    let feed = fetcher.fetch(url).await?;
    write_feed(&feed, out).map_err(FeedError::Output)
}
