//! HTTP client for the relayed API
//!
//! One shared `reqwest::Client` with an explicit request timeout. Routes are
//! appended to the base URL by plain concatenation; callers own whatever
//! path they pass in.

use apibot_core::{Error, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Client for GET requests against the configured target API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}{path}` and return the body as raw text.
    pub async fn fetch_text(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_send_error)?;

        if !status.is_success() {
            return Err(Error::status(status.as_u16(), truncate(&body, 512)));
        }

        Ok(body)
    }

    /// GET `{base_url}{path}` and decode the body as JSON.
    ///
    /// A body that is not valid JSON is reported as `MalformedSchema`,
    /// distinct from transport and status failures.
    pub async fn fetch_json(&self, path: &str) -> Result<serde_json::Value> {
        let body = self.fetch_text(path).await?;
        serde_json::from_str(&body).map_err(|e| Error::malformed_schema(e.to_string()))
    }
}

/// Map a reqwest send/read error into the transport error kind.
fn map_send_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::transport(format!("request timed out: {err}"))
    } else if err.is_connect() {
        Error::transport(format!("connection failed: {err}"))
    } else {
        Error::transport(err.to_string())
    }
}

/// Bound a body before carrying it in an error message.
fn truncate(body: &str, max: usize) -> String {
    if body.len() <= max {
        body.to_string()
    } else {
        let mut end = max;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    }
}
