//! High-level Z-API client.
//!
//! `ZApi` ties the endpoint groups to one dispatcher. It is constructed
//! explicitly and passed where needed; clones share the same transport.

use crate::api_client::ApiClient;
use crate::chats::ZApiChats;
use crate::contacts::ZApiContacts;
use crate::error::ZApiResult;
use crate::groups::ZApiGroups;
use crate::instance::ZApiInstance;
use crate::messaging::ZApiMessaging;
use crate::queue::ZApiQueue;
use crate::status::ZApiStatus;
use crate::transport::Transport;
use crate::types::ZApiConfig;
use log::info;
use serde_json::Value;
use std::sync::Arc;

/// Client for one Z-API instance.
#[derive(Debug, Clone)]
pub struct ZApi {
    client: ApiClient,
    instance: ZApiInstance,
    messaging: ZApiMessaging,
    status: ZApiStatus,
    chats: ZApiChats,
    contacts: ZApiContacts,
    groups: ZApiGroups,
    queue: ZApiQueue,
}

impl ZApi {
    /// Create a client that talks HTTP through `reqwest`.
    pub fn new(config: ZApiConfig) -> ZApiResult<Self> {
        let client = ApiClient::new(&config)?;
        info!("Z-API client configured for instance {}", config.instance_id);
        Ok(Self::from_client(client))
    }

    /// Create a client over a custom transport.
    pub fn with_transport(config: ZApiConfig, transport: Arc<dyn Transport>) -> ZApiResult<Self> {
        config.validate()?;
        Ok(Self::from_client(ApiClient::with_transport(&config, transport)))
    }

    /// Create a client from `ZAPI_*` environment variables.
    pub fn from_env() -> ZApiResult<Self> {
        Self::new(ZApiConfig::from_env()?)
    }

    fn from_client(client: ApiClient) -> Self {
        Self {
            instance: ZApiInstance::new(client.clone()),
            messaging: ZApiMessaging::new(client.clone()),
            status: ZApiStatus::new(client.clone()),
            chats: ZApiChats::new(client.clone()),
            contacts: ZApiContacts::new(client.clone()),
            groups: ZApiGroups::new(client.clone()),
            queue: ZApiQueue::new(client.clone()),
            client,
        }
    }

    pub fn config(&self) -> &ZApiConfig {
        self.client.config()
    }

    pub fn base_endpoint(&self) -> &str {
        self.client.base_endpoint()
    }

    /// Raw call for endpoints without a typed wrapper.
    pub async fn dispatch(&self, verb: &str, path: &str, body: Value) -> ZApiResult<Value> {
        self.client.dispatch(verb, path, body).await
    }

    // ─── Endpoint groups ─────────────────────────────────────────────

    pub fn api_client(&self) -> &ApiClient {
        &self.client
    }

    pub fn instance(&self) -> &ZApiInstance {
        &self.instance
    }

    pub fn messaging(&self) -> &ZApiMessaging {
        &self.messaging
    }

    pub fn status(&self) -> &ZApiStatus {
        &self.status
    }

    pub fn chats(&self) -> &ZApiChats {
        &self.chats
    }

    pub fn contacts(&self) -> &ZApiContacts {
        &self.contacts
    }

    pub fn groups(&self) -> &ZApiGroups {
        &self.groups
    }

    pub fn queue(&self) -> &ZApiQueue {
        &self.queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use crate::types::HttpVerb;
    use serde_json::json;

    fn mock_zapi() -> (ZApi, Arc<MockTransport>) {
        let transport = MockTransport::new();
        let zapi = ZApi::with_transport(ZApiConfig::new("ABC", "XYZ"), transport.clone()).unwrap();
        (zapi, transport)
    }

    #[test]
    fn test_base_endpoint() {
        let zapi = ZApi::new(ZApiConfig::new("ABC", "XYZ")).unwrap();
        assert_eq!(
            zapi.base_endpoint(),
            "https://api.z-api.io/instances/ABC/token/XYZ/"
        );
    }

    #[test]
    fn test_with_transport_validates_config() {
        let config = ZApiConfig::new("a", "b").with_base_url("mailto:x@y");
        let err = ZApi::with_transport(config, MockTransport::new()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[tokio::test]
    async fn test_groups_share_one_transport() {
        let (zapi, transport) = mock_zapi();
        zapi.instance().status().await.unwrap();
        zapi.messaging().send_text("5511", "hi").await.unwrap();
        zapi.status().send_text_status("up").await.unwrap();
        zapi.chats().chats().await.unwrap();
        zapi.contacts().contacts_default().await.unwrap();
        zapi.groups().leave_group("G1").await.unwrap();
        zapi.queue().queue().await.unwrap();

        let paths: Vec<String> = transport
            .calls()
            .into_iter()
            .map(|c| c.url.trim_start_matches(zapi.base_endpoint()).to_string())
            .collect();
        assert_eq!(
            paths,
            [
                "status",
                "send-text",
                "send-text-status",
                "chats",
                "contacts?page=1&pageSize=15",
                "leave-group",
                "queue",
            ]
        );
    }

    #[tokio::test]
    async fn test_clone_shares_transport() {
        let (zapi, transport) = mock_zapi();
        let other = zapi.clone();
        other.queue().clear_queue().await.unwrap();
        zapi.queue().clear_queue().await.unwrap();
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_raw_dispatch() {
        let (zapi, transport) = mock_zapi();
        transport.respond_json(json!({"value": true}));
        let resp = zapi
            .dispatch("put", "update-auto-read-message", json!({"value": true}))
            .await
            .unwrap();
        assert_eq!(resp, json!({"value": true}));
        assert_eq!(transport.only_call().verb, HttpVerb::Put);
    }

    #[tokio::test]
    async fn test_concurrent_calls() {
        let (zapi, transport) = mock_zapi();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let zapi = zapi.clone();
                tokio::spawn(async move {
                    zapi.messaging()
                        .send_text(&format!("55{}", i), "hi")
                        .await
                })
            })
            .collect();
        for h in handles {
            h.await.unwrap().unwrap();
        }
        assert_eq!(transport.call_count(), 8);
    }
}
