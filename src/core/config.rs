use std::time::Duration;

use reqwest::header::HeaderValue;

pub const TIMEOUT_ENV: &str = "FEED_FETCHER_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_ENV: &str = "FEED_FETCHER_CONNECT_TIMEOUT_SECS";
pub const USER_AGENT_ENV: &str = "FEED_FETCHER_USER_AGENT";

pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_SECS: u64 = 20;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a positive number of seconds, got {value:?}")]
    InvalidSeconds { name: &'static str, value: String },
    #[error("FEED_FETCHER_USER_AGENT is not a valid header value: {value:?}")]
    InvalidUserAgent { value: String },
}

/// Transport settings for a single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable source; blank values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(seconds) = read_seconds(&lookup, TIMEOUT_ENV)? {
            config.timeout = seconds;
        }
        if let Some(seconds) = read_seconds(&lookup, CONNECT_TIMEOUT_ENV)? {
            config.connect_timeout = seconds;
        }
        if let Some(user_agent) = lookup(USER_AGENT_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
        {
            if HeaderValue::from_str(&user_agent).is_err() {
                return Err(ConfigError::InvalidUserAgent { value: user_agent });
            }
            config.user_agent = user_agent;
        }
        Ok(config)
    }
}

fn read_seconds<F>(lookup: &F, name: &'static str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<u64>() {
        Ok(seconds) if seconds > 0 => Ok(Some(Duration::from_secs(seconds))),
        _ => Err(ConfigError::InvalidSeconds {
            name,
            value: raw,
        }),
    }
}
