//! I/O backend under the dispatcher.
//!
//! The dispatcher hands every fully-built call to a [`Transport`]. The
//! default [`ReqwestTransport`] talks HTTP; tests plug in a recording
//! double instead.

use crate::error::{ZApiError, ZApiResult};
use crate::types::{HttpVerb, ZApiConfig};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use std::fmt;
use std::time::Duration;

/// Raw answer from the gateway, before JSON decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw response.
///
/// Implementations must not retry and must report network failures as
/// [`ZApiErrorCode::TransportError`](crate::error::ZApiErrorCode::TransportError).
/// A non-2xx status is *not* an error at this layer.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    async fn send(&self, verb: HttpVerb, url: &str, body: String) -> ZApiResult<TransportResponse>;
}

/// HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport honouring the timeouts and user agent in `config`.
    pub fn new(config: &ZApiConfig) -> ZApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(ref agent) = config.user_agent {
            let value = HeaderValue::from_str(agent).map_err(|e| {
                ZApiError::invalid_argument(format!("Invalid user agent '{}': {}", agent, e))
            })?;
            headers.insert(USER_AGENT, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_sec as u64))
            .connect_timeout(Duration::from_secs(config.connect_timeout_sec as u64))
            .build()
            .map_err(|e| ZApiError::transport(format!("HTTP client init failed: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an existing client. The caller is responsible for its settings;
    /// `content-type` is still set on every request.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, verb: HttpVerb, url: &str, body: String) -> ZApiResult<TransportResponse> {
        let resp = self
            .client
            .request(verb.into(), url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| ZApiError::from(e).with_status(status))?;

        Ok(TransportResponse { status, body })
    }
}
