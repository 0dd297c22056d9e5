//! Status (stories) posts.

use crate::api_client::ApiClient;
use crate::error::ZApiResult;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::info;
use serde_json::Value;

/// Pure request builders for the status endpoints.
pub mod requests {
    use crate::types::ApiRequest;
    use serde_json::json;

    pub fn send_text_status(message: &str) -> ApiRequest {
        ApiRequest::post("send-text-status", json!({ "message": message }))
    }

    pub fn send_image_status(image: &str) -> ApiRequest {
        ApiRequest::post("send-image-status", json!({ "image": image }))
    }
}

/// Status publishing operations.
#[derive(Debug, Clone)]
pub struct ZApiStatus {
    client: ApiClient,
}

impl ZApiStatus {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn send_text_status(&self, message: &str) -> ZApiResult<Value> {
        let resp = self
            .client
            .execute(requests::send_text_status(message))
            .await?;
        info!("Posted text status");
        Ok(resp)
    }

    /// Post an image status. `image_base64` is a base64 data-URI (see
    /// [`encode_image_data_uri`]) or an image URL.
    pub async fn send_image_status(&self, image_base64: &str) -> ZApiResult<Value> {
        let resp = self
            .client
            .execute(requests::send_image_status(image_base64))
            .await?;
        info!("Posted image status");
        Ok(resp)
    }
}

/// `data:{mime};base64,{payload}` for raw image bytes.
pub fn encode_image_data_uri(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::decode_data_uri;
    use crate::testing::{mock_client, MOCK_BASE_ENDPOINT};
    use crate::types::HttpVerb;
    use serde_json::json;

    #[test]
    fn test_encode_image_data_uri() {
        let uri = encode_image_data_uri(b"hello", "image/png");
        assert_eq!(uri, "data:image/png;base64,aGVsbG8=");
        assert_eq!(decode_data_uri(&uri).unwrap(), b"hello");
    }

    #[test]
    fn test_paths() {
        assert_eq!(requests::send_text_status("hi").path, "send-text-status");
        assert_eq!(requests::send_image_status("x").path, "send-image-status");
    }

    #[tokio::test]
    async fn test_send_image_status() {
        let (client, transport) = mock_client();
        let uri = encode_image_data_uri(&[1, 2, 3], "image/jpeg");
        ZApiStatus::new(client).send_image_status(&uri).await.unwrap();

        let call = transport.only_call();
        assert_eq!(call.verb, HttpVerb::Post);
        assert_eq!(call.url, format!("{}send-image-status", MOCK_BASE_ENDPOINT));
        assert_eq!(call.body, json!({ "image": uri }));
    }

    #[tokio::test]
    async fn test_send_text_status() {
        let (client, transport) = mock_client();
        ZApiStatus::new(client).send_text_status("Good morning").await.unwrap();
        assert_eq!(transport.only_call().body, json!({"message": "Good morning"}));
    }
}
