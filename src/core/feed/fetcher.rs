use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Url;

use crate::core::config::FetchConfig;

const FEED_ACCEPT: &str = "application/atom+xml, application/rss+xml, application/feed+json, \
                           application/xml;q=0.9, text/xml;q=0.9, */*;q=0.8";
const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone)]
pub struct FetchedFeed {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
    #[error("cannot read {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },
}

pub fn build_client(config: &FetchConfig) -> Result<reqwest::Client, FetchError> {
    let mut default_headers = reqwest::header::HeaderMap::new();
    default_headers.insert(ACCEPT, HeaderValue::from_static(FEED_ACCEPT));

    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(default_headers)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()?;
    Ok(client)
}

/// Reads the document behind `url`, over HTTP(S) or from a `file://` path.
pub async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<FetchedFeed, FetchError> {
    let parsed = Url::parse(url).map_err(|error| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: error.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => fetch_http(client, parsed).await,
        "file" => read_file(&parsed).await,
        other => Err(FetchError::UnsupportedScheme(other.to_string())),
    }
}

async fn fetch_http(client: &reqwest::Client, url: Url) -> Result<FetchedFeed, FetchError> {
    tracing::debug!(%url, "requesting feed");
    let response = client.get(url).send().await?;
    let status = response.status();
    tracing::debug!(status = status.as_u16(), "received response");
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);
    let body = response.bytes().await?.to_vec();
    tracing::debug!(
        content_type = content_type.as_deref().unwrap_or("-"),
        bytes = body.len(),
        "downloaded feed body"
    );

    Ok(FetchedFeed { body, content_type })
}

async fn read_file(url: &Url) -> Result<FetchedFeed, FetchError> {
    let path = url
        .to_file_path()
        .map_err(|()| FetchError::File {
            path: url.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a local path"),
        })?;
    tracing::debug!(path = %path.display(), "reading feed file");
    let body = tokio::fs::read(&path).await.map_err(|source| FetchError::File {
        path: path.display().to_string(),
        source,
    })?;

    Ok(FetchedFeed {
        body,
        content_type: None,
    })
}
