//! HTTP client for the Airtable API
//!
//! Handles URL construction (percent-encoded path segments), bearer
//! authentication for API requests, and status-to-error mapping. Requests
//! are never retried.

use crate::error::{Error, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default API endpoint for Airtable
pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";

/// Connect timeout applied to every request
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for API requests (overridable for tests)
    pub base_url: String,
    /// Bearer credential sent on schema and record requests
    pub api_key: String,
    /// Read timeout; connection timeout stays fixed at 5 seconds
    pub read_timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            read_timeout: None,
            user_agent: format!("airtable-export/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the read timeout
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.read_timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client handle shared by all components of a run
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Self {
        let mut builder = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(&config.user_agent);

        if let Some(read_timeout) = config.read_timeout {
            builder = builder.read_timeout(read_timeout);
        }

        let client = builder.build().expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Build an API URL from path segments, percent-encoding each segment.
    ///
    /// A `/` inside a segment (e.g. in a table name) is encoded rather than
    /// splitting the path.
    pub fn api_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url)?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| Error::config("API base URL cannot be a base"))?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// Make an authenticated GET request and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let mut request = self.client.get(url.clone()).bearer_auth(&self.config.api_key);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = check_status(request.send().await?).await?;
        debug!("GET {} succeeded", url);
        Ok(response.json().await?)
    }

    /// Fetch a URL as raw bytes.
    ///
    /// Attachment URLs are pre-signed; no Authorization header is sent.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = check_status(self.client.get(url).send().await?).await?;
        debug!("GET {} succeeded", url);
        Ok(response.bytes().await?.to_vec())
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .field("user_agent", &self.config.user_agent)
            .field("read_timeout", &self.config.read_timeout)
            .finish_non_exhaustive()
    }
}

/// Map a non-success status to a fatal error, keeping the response body
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::http_status(status.as_u16(), body))
}
