//! Crate-level error types for the Z-API client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Alias for `Result<T, ZApiError>`.
pub type ZApiResult<T> = Result<T, ZApiError>;

/// Uniform error type used across the crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZApiError {
    pub code: ZApiErrorCode,
    pub message: String,
    /// Optional detail, e.g. the (truncated) upstream response body.
    pub details: Option<String>,
    /// HTTP status code if the gateway answered at all.
    pub http_status: Option<u16>,
}

impl fmt::Display for ZApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(status) = self.http_status {
            write!(f, " (HTTP {})", status)?;
        }
        if let Some(ref d) = self.details {
            write!(f, ": {}", d)?;
        }
        Ok(())
    }
}

impl std::error::Error for ZApiError {}

/// The two failure kinds a call can end in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZApiErrorCode {
    /// A caller-supplied enumerated value was outside its allowed set.
    /// Raised before any I/O.
    InvalidArgument,
    /// The HTTP exchange failed: network error, non-2xx status or an
    /// undecodable body.
    TransportError,
}

/// Upstream bodies are cut to this many characters in `details`.
const MAX_DETAIL_CHARS: usize = 500;

impl ZApiError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self {
            code: ZApiErrorCode::InvalidArgument,
            message: msg.into(),
            details: None,
            http_status: None,
        }
    }

    /// An enumerated parameter outside its allowed set. The message lists
    /// both the allowed values and the supplied one.
    pub fn not_allowed(what: &str, allowed: &[&str], supplied: &str) -> Self {
        Self::invalid_argument(format!(
            "The supplied {} is invalid. Allowed values are {}. Supplied value: {}",
            what,
            allowed.join(","),
            supplied
        ))
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self {
            code: ZApiErrorCode::TransportError,
            message: msg.into(),
            details: None,
            http_status: None,
        }
    }

    /// Build from a non-success gateway response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = Self::parse_gateway_error(body)
            .unwrap_or_else(|| format!("Gateway responded with HTTP {}", status));
        Self {
            code: ZApiErrorCode::TransportError,
            message,
            details: (!body.is_empty()).then(|| body.chars().take(MAX_DETAIL_CHARS).collect()),
            http_status: Some(status),
        }
    }

    /// Attach an HTTP status to an existing error.
    pub fn with_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.code == ZApiErrorCode::InvalidArgument
    }

    pub fn is_transport(&self) -> bool {
        self.code == ZApiErrorCode::TransportError
    }

    // The gateway usually answers errors with `{"error": "...", "message": "..."}`.
    fn parse_gateway_error(body: &str) -> Option<String> {
        let v = serde_json::from_str::<serde_json::Value>(body).ok()?;
        v["message"]
            .as_str()
            .or_else(|| v["error"].as_str())
            .map(String::from)
    }
}

impl From<reqwest::Error> for ZApiError {
    /// The request URL is stripped: it carries the instance token.
    fn from(e: reqwest::Error) -> Self {
        let status = e.status();
        let err = Self::transport(e.without_url().to_string());
        match status {
            Some(status) => err.with_status(status.as_u16()),
            None => err,
        }
    }
}
