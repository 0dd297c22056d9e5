//! Request dispatcher for the Z-API gateway.
//!
//! Every endpoint ends up here: the verb is validated, the body serialized,
//! exactly one request is sent through the [`Transport`], and the JSON
//! answer is decoded into a generic [`serde_json::Value`]. There is no
//! retry; failures surface immediately.

use crate::error::{ZApiError, ZApiResult};
use crate::transport::{ReqwestTransport, Transport, TransportResponse};
use crate::types::{ApiRequest, ZApiConfig};
use log::{debug, warn};
use serde_json::Value;
use std::sync::Arc;

/// Low-level client bound to one instance.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ZApiConfig,
    base_endpoint: String,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Create a client that talks HTTP through `reqwest`.
    pub fn new(config: &ZApiConfig) -> ZApiResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over any transport.
    pub fn with_transport(config: &ZApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_endpoint: config.base_endpoint(),
            config: config.clone(),
            transport,
        }
    }

    pub fn config(&self) -> &ZApiConfig {
        &self.config
    }

    /// `https://api.z-api.io/instances/{id}/token/{token}/`
    pub fn base_endpoint(&self) -> &str {
        &self.base_endpoint
    }

    /// Absolute URL for a relative path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_endpoint, path.trim_start_matches('/'))
    }

    /// Perform one API call from a free-form verb.
    ///
    /// The verb is uppercased and checked against GET, POST, PUT, PATCH and
    /// DELETE before anything is sent.
    pub async fn dispatch(&self, verb: &str, path: &str, body: Value) -> ZApiResult<Value> {
        let request = ApiRequest::new(verb, path, body)?;
        self.execute(request).await
    }

    /// Perform one already-validated API call.
    pub async fn execute(&self, request: ApiRequest) -> ZApiResult<Value> {
        // The URL embeds the token, so only the relative path is logged.
        debug!("{} {}", request.verb, request.path);

        let url = self.url(&request.path);
        let resp = self
            .transport
            .send(request.verb, &url, request.body_json())
            .await?;

        if !resp.is_success() {
            warn!("{} {} -> HTTP {}", request.verb, request.path, resp.status);
        }
        decode_response(resp)
    }
}

/// Turn a raw response into JSON, or a transport error.
fn decode_response(resp: TransportResponse) -> ZApiResult<Value> {
    if !resp.is_success() {
        return Err(ZApiError::from_status(resp.status, &resp.body));
    }
    if resp.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&resp.body).map_err(|e| {
        ZApiError::transport(format!("JSON parse error: {}", e)).with_status(resp.status)
    })
}
