use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::endpoint::{build_url, Endpoint};

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Failed to build request URL: {0}")]
    UrlBuild(#[from] url::ParseError),
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP status {status}")]
    Status { status: u16 },
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Coarse classification of a [`RequestError`], used by expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Status(u16),
    Parse,
    UrlBuild,
    Network,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Status(status) => write!(f, "HTTP status {}", status),
            ErrorKind::Parse => f.write_str("parse error"),
            ErrorKind::UrlBuild => f.write_str("URL build error"),
            ErrorKind::Network => f.write_str("network error"),
        }
    }
}

impl RequestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RequestError::UrlBuild(_) => ErrorKind::UrlBuild,
            RequestError::Request(_) => ErrorKind::Network,
            RequestError::Status { status } => ErrorKind::Status(*status),
            RequestError::Parse(_) => ErrorKind::Parse,
        }
    }
}

#[derive(Clone)]
pub struct SwapiClient {
    client: Client,
    base_url: String,
}

impl SwapiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `<base><term>[?search=<search>]` and decode the body as JSON.
    ///
    /// Exactly one request is sent per call. Any status outside 200-299 is an
    /// error carrying the code; the body of such a response is never read.
    pub async fn request(&self, term: &str, search: &str) -> Result<Value, RequestError> {
        self.request_endpoint(&Endpoint::new(term, search)).await
    }

    pub async fn request_endpoint(&self, endpoint: &Endpoint) -> Result<Value, RequestError> {
        let url = build_url(&self.base_url, endpoint)?;
        debug!(%url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "response");

        if !status.is_success() {
            return Err(RequestError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for SwapiClient {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_BASE_URL.to_string())
    }
}
