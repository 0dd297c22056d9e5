//! Shared types for the Z-API client.
//!
//! Models cover connection configuration, the request value handed to the
//! dispatcher, and the small enumerations the gateway restricts (HTTP
//! verbs, document extensions, contact pagination).

use crate::error::{ZApiError, ZApiResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

// ═══════════════════════════════════════════════════════════════════════
//  Configuration
// ═══════════════════════════════════════════════════════════════════════

/// Public Z-API host.
pub const DEFAULT_BASE_URL: &str = "https://api.z-api.io";

/// Connection configuration for one Z-API instance.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ZApiConfig {
    /// Instance identifier shown in the Z-API panel.
    pub instance_id: String,
    /// Instance token. Embedded in every request URL.
    pub token_id: String,
    /// Base URL override (default: `https://api.z-api.io`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Timeout in seconds for a whole API call.
    #[serde(default = "default_timeout")]
    pub timeout_sec: u32,
    /// Timeout in seconds for establishing the connection.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_sec: u32,
    /// Optional `User-Agent` header.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout() -> u32 {
    30
}
fn default_connect_timeout() -> u32 {
    15
}

impl ZApiConfig {
    pub fn new(instance_id: impl Into<String>, token_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            token_id: token_id.into(),
            base_url: default_base_url(),
            timeout_sec: default_timeout(),
            connect_timeout_sec: default_connect_timeout(),
            user_agent: None,
        }
    }

    /// Point the client at another host (self-hosted gateway, test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout_sec: u32) -> Self {
        self.timeout_sec = timeout_sec;
        self
    }

    /// Read the configuration from `ZAPI_INSTANCE_ID`, `ZAPI_TOKEN_ID` and
    /// the optional `ZAPI_BASE_URL` / `ZAPI_TIMEOUT_SEC`.
    pub fn from_env() -> ZApiResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ZApiResult<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ZApiError::invalid_argument(format!("{} is not set", key)))
        };

        let mut config = Self::new(required("ZAPI_INSTANCE_ID")?, required("ZAPI_TOKEN_ID")?);
        if let Some(base_url) = lookup("ZAPI_BASE_URL").filter(|v| !v.is_empty()) {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup("ZAPI_TIMEOUT_SEC") {
            config.timeout_sec = raw.parse().map_err(|_| {
                ZApiError::invalid_argument(format!("ZAPI_TIMEOUT_SEC must be a number, got {}", raw))
            })?;
        }
        Ok(config)
    }

    /// Check that `base_url` is an absolute http(s) URL.
    pub fn validate(&self) -> ZApiResult<()> {
        let url = url::Url::parse(&self.base_url).map_err(|e| {
            ZApiError::invalid_argument(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ZApiError::not_allowed("URL scheme", &["http", "https"], other)),
        }
    }

    /// `{base_url}/instances/{instance_id}/token/{token_id}/`
    pub fn base_endpoint(&self) -> String {
        format!(
            "{}/instances/{}/token/{}/",
            self.base_url.trim_end_matches('/'),
            self.instance_id,
            self.token_id
        )
    }
}

impl fmt::Debug for ZApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZApiConfig")
            .field("instance_id", &self.instance_id)
            .field("token_id", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_sec", &self.timeout_sec)
            .field("connect_timeout_sec", &self.connect_timeout_sec)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  HTTP verbs
// ═══════════════════════════════════════════════════════════════════════

/// The verbs the dispatcher accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpVerb {
    pub const ALL: [HttpVerb; 5] = [
        HttpVerb::Get,
        HttpVerb::Post,
        HttpVerb::Put,
        HttpVerb::Patch,
        HttpVerb::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpVerb {
    type Err = ZApiError;

    /// Case-insensitive; the value is uppercased before matching.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == normalized)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                ZApiError::not_allowed("http method", &allowed, &normalized)
            })
    }
}

impl From<HttpVerb> for reqwest::Method {
    fn from(verb: HttpVerb) -> Self {
        match verb {
            HttpVerb::Get => reqwest::Method::GET,
            HttpVerb::Post => reqwest::Method::POST,
            HttpVerb::Put => reqwest::Method::PUT,
            HttpVerb::Patch => reqwest::Method::PATCH,
            HttpVerb::Delete => reqwest::Method::DELETE,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Request
// ═══════════════════════════════════════════════════════════════════════

/// One API call, relative to the instance base endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiRequest {
    pub verb: HttpVerb,
    /// Relative path, may carry a query string (`contacts?page=1&pageSize=15`).
    pub path: String,
    /// JSON object sent as the payload, for every verb.
    pub body: Value,
}

impl ApiRequest {
    /// Validate a free-form verb and build a request. No I/O happens here.
    ///
    /// A `null` body is treated as empty; any other non-object body is rejected.
    pub fn new(verb: &str, path: impl Into<String>, body: Value) -> ZApiResult<Self> {
        let verb: HttpVerb = verb.parse()?;
        let body = match body {
            Value::Null => Value::Object(Map::new()),
            Value::Object(_) => body,
            _ => {
                return Err(ZApiError::invalid_argument(
                    "Request body must be a JSON object",
                ))
            }
        };
        Ok(Self {
            verb,
            path: path.into(),
            body,
        })
    }

    /// Build with an already-typed verb.
    pub fn with_body(verb: HttpVerb, path: impl Into<String>, body: Value) -> Self {
        Self {
            verb,
            path: path.into(),
            body,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::with_body(HttpVerb::Get, path, empty_body())
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::with_body(HttpVerb::Post, path, body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::with_body(HttpVerb::Delete, path, empty_body())
    }

    /// Serialized payload.
    pub fn body_json(&self) -> String {
        // Serializing a `Value` cannot fail.
        self.body.to_string()
    }
}

fn empty_body() -> Value {
    Value::Object(Map::new())
}

// ═══════════════════════════════════════════════════════════════════════
//  Documents
// ═══════════════════════════════════════════════════════════════════════

/// File extensions the gateway accepts for `send-document/{extension}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentExtension {
    Pdf,
    Docx,
    Doc,
    Xlsx,
    Deb,
    Gz,
    #[serde(rename = "7z")]
    SevenZ,
    Zip,
}

impl DocumentExtension {
    pub const ALL: [DocumentExtension; 8] = [
        DocumentExtension::Pdf,
        DocumentExtension::Docx,
        DocumentExtension::Doc,
        DocumentExtension::Xlsx,
        DocumentExtension::Deb,
        DocumentExtension::Gz,
        DocumentExtension::SevenZ,
        DocumentExtension::Zip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentExtension::Pdf => "pdf",
            DocumentExtension::Docx => "docx",
            DocumentExtension::Doc => "doc",
            DocumentExtension::Xlsx => "xlsx",
            DocumentExtension::Deb => "deb",
            DocumentExtension::Gz => "gz",
            DocumentExtension::SevenZ => "7z",
            DocumentExtension::Zip => "zip",
        }
    }
}

impl fmt::Display for DocumentExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentExtension {
    type Err = ZApiError;

    /// Exact match: `PDF` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ext| ext.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|e| e.as_str()).collect();
                ZApiError::not_allowed("document extension", &allowed, s)
            })
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Pagination
// ═══════════════════════════════════════════════════════════════════════

/// Page selector for contact listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 15,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    pub fn query(&self) -> String {
        format!("page={}&pageSize={}", self.page, self.page_size)
    }
}
