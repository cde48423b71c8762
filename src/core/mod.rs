pub mod config;
pub mod feed;

use config::ConfigError;
use feed::fetcher::FetchError;
use feed::parser::FeedParseError;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("{0}")]
    Usage(#[from] clap::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("network error: {0}")]
    Network(#[from] FetchError),
    #[error("parse error: {0}")]
    Parse(#[from] FeedParseError),
    #[error("cannot write output: {0}")]
    Output(#[source] std::io::Error),
    #[error("cannot start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
