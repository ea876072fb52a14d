//! Outbound HTTP plumbing shared by the event and business search proxies.
//!
//! A search runs in three stages connected by plain data:
//! a query builder produces an [`UpstreamRequest`], an [`UpstreamTransport`]
//! performs it and hands back an [`UpstreamResponse`], and a response mapper
//! decodes that into the caller-facing payload. Only the transport touches
//! the network, so tests swap it for a recording fake.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("invalid upstream url: {0}")]
    Url(#[from] url::ParseError),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("upstream call timed out")]
    Timeout,

    #[error("malformed upstream body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else {
            // The url carries the caller's api key
            UpstreamError::Transport(err.without_url().to_string())
        }
    }
}

/// A fully built outbound GET.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamRequest {
    pub url: Url,
    pub bearer_token: Option<String>,
}

impl UpstreamRequest {
    pub fn get(url: Url) -> Self {
        Self {
            url,
            bearer_token: None,
        }
    }

    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer_token = Some(token.to_string());
        self
    }

    /// Value of a query parameter, if present. Mostly useful for assertions.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError>;
}

/// `reqwest` backed transport with a bounded per-call timeout.
pub struct HttpTransport {
    http_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, UpstreamError> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl UpstreamTransport for HttpTransport {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError> {
        log::debug!(
            "GET {}{}",
            request.url.host_str().unwrap_or_default(),
            request.url.path()
        );

        let mut builder = self.http_client.get(request.url.clone());
        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        log::debug!("{} answered {}", request.url.path(), status);

        Ok(UpstreamResponse { status, body })
    }
}

/// Appends `segment` to the base url's path, keeping any prefix such as
/// `/discovery/v2`.
pub fn endpoint(base: &Url, segment: &str) -> Result<Url, UpstreamError> {
    let mut joined = base.as_str().trim_end_matches('/').to_string();
    joined.push('/');
    joined.push_str(segment.trim_start_matches('/'));
    Ok(Url::parse(&joined)?)
}
