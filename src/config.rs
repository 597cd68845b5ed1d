//! Configuration management for the schema loader
//!
//! Configuration is loaded from environment variables, in one place, so the
//! rest of the program never touches the process environment.

use std::env;

use crate::error::{LoadError, LoadResult};

/// Directus instance used when `DIRECTUS_URL` is not set
pub const DEFAULT_DIRECTUS_URL: &str = "https://directus.bounteer.com";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Directus instance
    pub directus_url: String,
    /// Static API token presented as bearer credential
    pub directus_token: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DIRECTUS_URL` falls back to the default instance; a trailing slash
    /// is trimmed so URL joining never produces a double slash.
    /// `DIRECTUS_TOKEN` is required and must be non-empty.
    pub fn from_env() -> LoadResult<Self> {
        let directus_url = env::var("DIRECTUS_URL")
            .unwrap_or_else(|_| DEFAULT_DIRECTUS_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let directus_token = match env::var("DIRECTUS_TOKEN") {
            Ok(token) if !token.trim().is_empty() => token,
            _ => return Err(LoadError::MissingCredential),
        };

        Ok(Self {
            directus_url,
            directus_token,
        })
    }
}
