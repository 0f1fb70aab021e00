//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients from the `[http]` configuration
//! - GET requests to fetch page content
//! - Strict UTF-8 decoding of the body
//! - Error classification into network, protocol and decode failures
//!
//! The fetcher never retries. Any non-success is reported once and the
//! coordinator decides what to do with it.

use crate::config::{HttpConfig, TlsMode};
use crate::state::FailureKind;
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Why a single fetch attempt failed
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused or reset, DNS failure, timeout, interrupted body
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}")]
    Status { status: StatusCode },

    /// The transport rejected the URL or the redirect chain
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The body is not valid UTF-8
    #[error("body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

impl FetchError {
    /// Returns the failure category for reporting
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Network(_) => FailureKind::Network,
            Self::Status { .. } | Self::InvalidUrl(_) => FailureKind::Protocol,
            Self::Decode(_) => FailureKind::Decode,
        }
    }

    /// Classifies a transport-level error
    fn from_reqwest(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            Self::Status { status }
        } else if error.is_builder() || error.is_redirect() {
            Self::InvalidUrl(error.to_string())
        } else {
            Self::Network(error.to_string())
        }
    }
}

/// Retrieves a page body for the crawl loop
///
/// Implementations must not panic on transport problems: every failure is
/// returned as a `FetchError`.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` and returns its body as text
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// Builds an HTTP client with proper configuration
///
/// When `config.tls` is [`TlsMode::Insecure`], certificate validation is
/// disabled so that self-signed and misconfigured endpoints can still be
/// crawled. A warning is logged every time such a client is built.
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use ripple_crawl::config::HttpConfig;
/// use ripple_crawl::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let insecure = config.tls == TlsMode::Insecure;
    if insecure {
        tracing::warn!("TLS certificate verification is disabled (tls = \"insecure\")");
    }

    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .redirect(Policy::limited(config.max_redirects))
        .danger_accept_invalid_certs(insecure)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body as UTF-8 text
///
/// # Error Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | Connection refused / reset, DNS failure | `Network` |
/// | Timeout (connect or whole request) | `Network` |
/// | Body interrupted while reading | `Network` |
/// | HTTP 4xx / 5xx | `Status` |
/// | URL rejected by the client, redirect limit | `InvalidUrl` |
/// | Body not valid UTF-8 | `Decode` |
pub async fn fetch_url(client: &Client, url: &Url) -> Result<String, FetchError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(FetchError::from_reqwest)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { status });
    }

    let bytes = response.bytes().await.map_err(FetchError::from_reqwest)?;

    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Fetcher backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from configuration and wraps it
    pub fn from_config(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config)?))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        fetch_url(&self.client, url).await
    }
}
