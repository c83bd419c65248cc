//! Business configuration shared by the UI and the CLI.
//!
//! The only setting is the REST backend base URL. It resolves in this order:
//! - an explicit value passed to [`BusinessConfig::new`] (tests, CLI `--api-url`)
//! - the `ROSTER_API_URL` environment variable (read at build time on wasm32)
//! - [`DEFAULT_API_BASE_URL`]

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

/// Backend used when nothing overrides it (a local json-server).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(String),
    #[error("ROSTER_API_URL must start with http:// or https://, got `{0}`")]
    InvalidBaseUrl(String),
}

/// Environment variables as read by `serde_env`.
#[derive(Debug, Deserialize)]
struct RawConfig {
    roster_api_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: trim_base_url(base_url.into()),
        }
    }

    /// Reads `ROSTER_API_URL` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Builds the configuration from an arbitrary set of key/value pairs.
    pub fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig =
            serde_env::from_iter(vars).map_err(|e| ConfigError::Env(e.to_string()))?;

        match raw.roster_api_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                let url = url.trim().to_owned();
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::InvalidBaseUrl(url));
                }
                info!("Using ROSTER_API_URL: {url}");
                Ok(Self::new(url))
            }
            None => Ok(Self::new(DEFAULT_API_BASE_URL)),
        }
    }

    /// Collection endpoint, e.g. `http://localhost:3001/users`.
    pub fn users_url(&self) -> String {
        format!("{}/users", self.api_base_url)
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        if cfg!(target_arch = "wasm32") {
            return Self::new(option_env!("ROSTER_API_URL").unwrap_or(DEFAULT_API_BASE_URL));
        }

        Self::from_env().unwrap_or_else(|err| {
            warn!("{err}; falling back to {DEFAULT_API_BASE_URL}");
            Self::new(DEFAULT_API_BASE_URL)
        })
    }
}

fn trim_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
