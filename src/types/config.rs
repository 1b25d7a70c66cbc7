//! Client configuration

use super::constants::{endpoints, env_vars};
use crate::{NftGateError, Result};
use std::time::Duration;

/// Configuration shared by every request issued through a client
///
/// Both timeouts are fixed at construction and apply to every call.
#[derive(Clone)]
pub struct ClientConfig {
    /// API origin, e.g. `https://api.nftgate.io`
    pub base_url: String,
    /// Path prefix inserted between the origin and resource paths
    pub path_prefix: String,
    /// Bearer credential attached to every request
    pub api_key: String,
    /// Time allowed to establish a connection
    pub connect_timeout: Duration,
    /// Total time allowed for a request, body included
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("path_prefix", &self.path_prefix)
            .field("api_key", &"<redacted>")
            .field("connect_timeout", &self.connect_timeout)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new config for the production API
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: endpoints::DEFAULT_BASE_URL.to_string(),
            path_prefix: endpoints::DEFAULT_PATH_PREFIX.to_string(),
            api_key: api_key.into(),
            connect_timeout: endpoints::DEFAULT_CONNECT_TIMEOUT,
            timeout: endpoints::DEFAULT_TIMEOUT,
            user_agent: endpoints::DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Create config from environment variables
    ///
    /// `NFTGATE_API_KEY` is required; the remaining variables fall back to defaults
    /// when unset. A timeout that is not a whole number of seconds is rejected.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(env_vars::API_KEY)
            .map_err(|_| NftGateError::config(format!("{} must be set", env_vars::API_KEY)))?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var(env_vars::BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(timeout) = secs_from_env(env_vars::TIMEOUT_SECS)? {
            config.timeout = timeout;
        }
        if let Some(timeout) = secs_from_env(env_vars::CONNECT_TIMEOUT_SECS)? {
            config.connect_timeout = timeout;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the client configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(NftGateError::config("Base URL cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(NftGateError::config(
                "Base URL must start with http:// or https://",
            ));
        }

        if self.api_key.trim().is_empty() {
            return Err(NftGateError::config("API key cannot be empty"));
        }

        if self.connect_timeout.is_zero() || self.timeout.is_zero() {
            return Err(NftGateError::config("Timeouts must be greater than zero"));
        }

        Ok(())
    }

    /// Set the API origin
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the path prefix
    pub fn with_path_prefix(mut self, path_prefix: impl Into<String>) -> Self {
        self.path_prefix = path_prefix.into();
        self
    }

    /// Set the connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the total request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn secs_from_env(name: &str) -> Result<Option<Duration>> {
    match std::env::var(name) {
        Ok(raw) => parse_secs(name, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

/// Parse a whole number of seconds; anything else is a config error
fn parse_secs(name: &str, raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| {
            NftGateError::config(format!(
                "{} must be a whole number of seconds, got `{}`",
                name, raw
            ))
        })
}
