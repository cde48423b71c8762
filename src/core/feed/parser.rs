use chrono::SecondsFormat;
use feed_rs::model::{FeedType, Text};
use feed_rs::parser::{ParseErrorKind, ParseFeedError};

use super::types::{Entry, Feed, FeedFormat};

pub const UNTITLED_FEED: &str = "Untitled Feed";
pub const UNTITLED_ENTRY: &str = "Untitled Entry";
pub const UNKNOWN_TIMESTAMP: &str = "unknown";

#[derive(Debug, thiserror::Error)]
pub enum FeedParseError {
    #[error("feed payload is empty")]
    EmptyPayload,
    #[error("document has no recognizable feed root")]
    NoFeedRoot,
    #[error("feed parse error: {0}")]
    Malformed(ParseFeedError),
}

impl From<ParseFeedError> for FeedParseError {
    fn from(error: ParseFeedError) -> Self {
        match error {
            ParseFeedError::ParseError(ParseErrorKind::NoFeedRoot) => Self::NoFeedRoot,
            other => Self::Malformed(other),
        }
    }
}

/// Parses a fetched document into a [`Feed`].
///
/// Format detection is left to `feed-rs`; `uri` is handed over as the base
/// for resolving relative links.
pub fn parse_feed_bytes(raw: &[u8], uri: Option<&str>) -> Result<Feed, FeedParseError> {
    let trimmed = trim_leading_ascii_whitespace(raw);
    if trimmed.is_empty() {
        return Err(FeedParseError::EmptyPayload);
    }

    let feed = feed_rs::parser::Builder::new()
        .base_uri(uri)
        .build()
        .parse(trimmed)?;
    let title = display_title(feed.title.as_ref(), UNTITLED_FEED);
    let entries = feed.entries.iter().map(entry_from_model).collect();

    Ok(Feed {
        format: format_from_model(&feed.feed_type),
        title,
        entries,
    })
}

fn entry_from_model(entry: &feed_rs::model::Entry) -> Entry {
    let updated = entry
        .updated
        .or(entry.published)
        .map(|timestamp| timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        .unwrap_or_else(|| UNKNOWN_TIMESTAMP.to_string());

    Entry {
        title: display_title(entry.title.as_ref(), UNTITLED_ENTRY),
        updated,
    }
}

fn format_from_model(feed_type: &FeedType) -> FeedFormat {
    match feed_type {
        FeedType::Atom => FeedFormat::Atom,
        FeedType::RSS0 => FeedFormat::Rss0,
        FeedType::RSS1 => FeedFormat::Rss1,
        FeedType::RSS2 => FeedFormat::Rss2,
        FeedType::JSON => FeedFormat::JsonFeed,
    }
}

// Rendered output is line oriented, so titles must not span lines.
fn display_title(text: Option<&Text>, fallback: &str) -> String {
    let collapsed = text
        .map(|text| single_line(&text.content))
        .unwrap_or_default();
    if collapsed.is_empty() {
        fallback.to_string()
    } else {
        collapsed
    }
}

fn single_line(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn trim_leading_ascii_whitespace(raw: &[u8]) -> &[u8] {
    let mut index = 0;
    while index < raw.len() && raw[index].is_ascii_whitespace() {
        index += 1;
    }
    &raw[index..]
}
