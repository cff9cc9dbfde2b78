//! HTTP page source backed by a blocking reqwest client.

use crate::model::{NetworkError, PeoplePage};
use crate::source::PageSource;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::{debug, warn};

/// Connection settings for [`HttpPageSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Per-request timeout, covering connect and body read.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Fetches pages with `GET <url>` and decodes the JSON body.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    /// Build a source with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::Request` if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &FetchConfig) -> Result<Self, NetworkError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|source| NetworkError::Request {
                url: String::new(),
                source,
            })?;

        Ok(Self { client })
    }
}

impl PageSource for HttpPageSource {
    fn fetch_page(&self, url: &str) -> Result<PeoplePage, NetworkError> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| NetworkError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "non-success status");
            return Err(NetworkError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| NetworkError::Request {
            url: url.to_string(),
            source,
        })?;

        decode_page(url, &body)
    }
}

/// Decode a page body, attributing failures to `url`.
pub fn decode_page(url: &str, body: &str) -> Result<PeoplePage, NetworkError> {
    serde_json::from_str(body).map_err(|source| NetworkError::Decode {
        url: url.to_string(),
        source,
    })
}
