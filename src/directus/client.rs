//! Directus API client
//!
//! HTTP client for fetching the OpenAPI specification from a Directus
//! instance.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use tracing::{debug, error, instrument};

use crate::{
    config::Config,
    error::{LoadError, LoadResult},
};

/// Path of the OpenAPI specification endpoint on a Directus instance
const OAS_PATH: &str = "/server/specs/oas";

/// Directus API client
pub struct DirectusClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl DirectusClient {
    /// Create a new Directus client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.directus_url.clone(),
            token: config.directus_token.clone(),
        }
    }

    /// Full URL of the specification endpoint
    pub fn spec_url(&self) -> String {
        format!("{}{}", self.base_url, OAS_PATH)
    }

    /// Fetch the raw OpenAPI specification document.
    ///
    /// Returns the response body only for an exact 200 status; every other
    /// status is classified into the error taxonomy, even when the remote
    /// attached a body.
    #[instrument(skip(self))]
    pub async fn fetch_oas_spec(&self) -> LoadResult<String> {
        let url = self.spec_url();

        debug!(url = %url, "Fetching OpenAPI specification from Directus");

        let response = self
            .client
            .get(&url)
            .headers(self.bearer_headers())
            .send()
            .await
            .map_err(LoadError::from_transport)?;

        let status = response.status();
        debug!(status = %status, "Directus specification response status");

        if status.as_u16() != 200 {
            let text = response.text().await.unwrap_or_default();
            error!(status = %status, body = %text, "Directus specification request failed");
            return Err(LoadError::from_status(status));
        }

        let body = response.text().await.map_err(LoadError::from_transport)?;
        debug!(bytes = body.len(), "Received specification body");

        Ok(body)
    }

    /// Build headers with bearer token authentication
    fn bearer_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token)).expect("Invalid token format"),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }
}
