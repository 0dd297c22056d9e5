//! Recording transport for tests.

use crate::api_client::ApiClient;
use crate::error::ZApiResult;
use crate::transport::{Transport, TransportResponse};
use crate::types::{HttpVerb, ZApiConfig};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// A call as it reached the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub verb: HttpVerb,
    pub url: String,
    /// Payload parsed back to JSON (a string value if it was not JSON).
    pub body: Value,
}

/// Transport that records every call and replays queued responses.
///
/// With nothing queued it answers `200 {}`.
#[derive(Debug, Default)]
pub struct MockTransport {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<VecDeque<ZApiResult<TransportResponse>>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a raw response.
    pub fn respond_with(&self, status: u16, body: impl Into<String>) {
        lock(&self.responses).push_back(Ok(TransportResponse::new(status, body)));
    }

    /// Queue a 200 response carrying `value`.
    pub fn respond_json(&self, value: Value) {
        self.respond_with(200, value.to_string());
    }

    /// Queue a transport-level failure.
    pub fn fail_with(&self, err: crate::error::ZApiError) {
        lock(&self.responses).push_back(Err(err));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// The single recorded call. Panics unless exactly one call was made.
    pub fn only_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {:?}", calls);
        calls.into_iter().next().expect("checked above")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, verb: HttpVerb, url: &str, body: String) -> ZApiResult<TransportResponse> {
        let parsed = serde_json::from_str(&body).unwrap_or(Value::String(body));
        lock(&self.calls).push(RecordedCall {
            verb,
            url: url.to_string(),
            body: parsed,
        });
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Ok(TransportResponse::new(200, "{}")))
    }
}

/// Base endpoint used by [`mock_client`].
pub const MOCK_BASE_ENDPOINT: &str = "https://api.z-api.io/instances/ABC/token/XYZ/";

/// A dispatcher for instance `ABC` / token `XYZ` wired to a fresh mock.
pub fn mock_client() -> (ApiClient, Arc<MockTransport>) {
    let transport = MockTransport::new();
    let client = ApiClient::with_transport(&ZApiConfig::new("ABC", "XYZ"), transport.clone());
    (client, transport)
}
