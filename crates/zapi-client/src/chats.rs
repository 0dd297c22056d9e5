//! Chat listing.

use crate::api_client::ApiClient;
use crate::error::ZApiResult;
use serde_json::Value;

/// Pure request builders for the chat endpoints.
pub mod requests {
    use crate::types::ApiRequest;

    pub fn chats() -> ApiRequest {
        ApiRequest::get("chats")
    }

    pub fn chat_by_phone(phone: &str) -> ApiRequest {
        ApiRequest::get(format!("chats/{}", phone))
    }

    pub fn chat_messages(phone: &str) -> ApiRequest {
        ApiRequest::get(format!("chat-messages/{}", phone))
    }
}

#[derive(Debug, Clone)]
pub struct ZApiChats {
    client: ApiClient,
}

impl ZApiChats {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Every chat of the instance.
    pub async fn chats(&self) -> ZApiResult<Value> {
        self.client.execute(requests::chats()).await
    }

    pub async fn chat_by_phone(&self, phone: &str) -> ZApiResult<Value> {
        self.client.execute(requests::chat_by_phone(phone)).await
    }

    /// Messages of the chat with `phone`.
    pub async fn chat_messages(&self, phone: &str) -> ZApiResult<Value> {
        self.client.execute(requests::chat_messages(phone)).await
    }
}
