//! Command-line client for the roster users API.
//!
//! The binary in `main.rs` only parses arguments and dispatches here.

pub mod cli;
pub mod commands;
pub mod output;
pub mod timing;

use anyhow::{Context as _, Result};
use roster_business::{BusinessConfig, UsersApi};

/// Builds the API client; an explicit URL wins over the environment.
pub fn build_api(api_url: Option<&str>) -> Result<UsersApi> {
    let config = match api_url {
        Some(url) => BusinessConfig::new(url),
        None => BusinessConfig::from_env().context("Invalid configuration")?,
    };
    tracing::debug!(api_url = %config.api_base_url, "using users API");
    Ok(UsersApi::new(config))
}
