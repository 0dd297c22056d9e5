//! Outbound send-queue management.

use crate::api_client::ApiClient;
use crate::error::ZApiResult;
use log::info;
use serde_json::Value;

/// Pure request builders for the queue endpoints.
pub mod requests {
    use crate::types::ApiRequest;

    pub fn queue() -> ApiRequest {
        ApiRequest::get("queue")
    }

    pub fn clear_queue() -> ApiRequest {
        ApiRequest::delete("queue")
    }

    pub fn remove_queued_message(zap_id: &str) -> ApiRequest {
        ApiRequest::delete(format!("queue/{}", zap_id))
    }
}

#[derive(Debug, Clone)]
pub struct ZApiQueue {
    client: ApiClient,
}

impl ZApiQueue {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Messages waiting to be sent.
    pub async fn queue(&self) -> ZApiResult<Value> {
        self.client.execute(requests::queue()).await
    }

    /// Drop every queued message.
    pub async fn clear_queue(&self) -> ZApiResult<Value> {
        let resp = self.client.execute(requests::clear_queue()).await?;
        info!("Cleared send queue");
        Ok(resp)
    }

    /// Drop one queued message by its zap id.
    pub async fn remove_queued_message(&self, zap_id: &str) -> ZApiResult<Value> {
        let resp = self
            .client
            .execute(requests::remove_queued_message(zap_id))
            .await?;
        info!("Removed queued message {}", zap_id);
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mock_client, MOCK_BASE_ENDPOINT};
    use crate::types::HttpVerb;
    use serde_json::json;

    #[tokio::test]
    async fn test_remove_queued_message() {
        let (client, transport) = mock_client();
        ZApiQueue::new(client)
            .remove_queued_message("abc123")
            .await
            .unwrap();

        let call = transport.only_call();
        assert_eq!(call.verb, HttpVerb::Delete);
        assert_eq!(call.url, format!("{}queue/abc123", MOCK_BASE_ENDPOINT));
        assert_eq!(call.body, json!({}));
    }

    #[tokio::test]
    async fn test_clear_and_list() {
        let (client, transport) = mock_client();
        let queue = ZApiQueue::new(client);
        queue.queue().await.unwrap();
        queue.clear_queue().await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].verb, HttpVerb::Get);
        assert_eq!(calls[1].verb, HttpVerb::Delete);
        assert_eq!(calls[0].url, calls[1].url);
        assert!(calls[1].url.ends_with("/queue"));
    }
}
