//! Connection settings for the assets backend.

use std::time::Duration;

use assetfolio_core::errors::{Error, Result};

/// Default base URL of the assets backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub const ENV_API_URL: &str = "ASSETFOLIO_API_URL";
pub const ENV_API_TIMEOUT_MS: &str = "ASSETFOLIO_API_TIMEOUT_MS";
pub const ENV_API_TOKEN: &str = "ASSETFOLIO_API_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub access_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            access_token: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Reads settings from the environment, loading a `.env` file first if
    /// one exists. Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            let url = url.trim();
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(Error::InvalidConfigValue(format!(
                    "{} must be an http(s) URL, got '{}'",
                    ENV_API_URL, url
                )));
            }
            config.base_url = url.to_string();
        }

        if let Some(raw) = lookup(ENV_API_TIMEOUT_MS) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| {
                    Error::InvalidConfigValue(format!(
                        "{} must be a positive number of milliseconds, got '{}'",
                        ENV_API_TIMEOUT_MS, raw
                    ))
                })?;
            config.timeout = Duration::from_millis(ms);
        }

        config.access_token = lookup(ENV_API_TOKEN).filter(|t| !t.trim().is_empty());

        Ok(config)
    }
}
