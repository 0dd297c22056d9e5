//! Instance lifecycle: QR pairing, restart, disconnect, status.

use crate::api_client::ApiClient;
use crate::error::{ZApiError, ZApiResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::info;
use serde_json::Value;

/// Pure request builders for the instance endpoints.
pub mod requests {
    use crate::types::ApiRequest;

    pub fn qr_code() -> ApiRequest {
        ApiRequest::get("qr-code")
    }

    pub fn qr_code_image() -> ApiRequest {
        ApiRequest::get("qr-code/image")
    }

    pub fn restart_instance() -> ApiRequest {
        ApiRequest::get("restart")
    }

    pub fn disconnect() -> ApiRequest {
        ApiRequest::get("disconnect")
    }

    pub fn status() -> ApiRequest {
        ApiRequest::get("status")
    }

    pub fn restore_session() -> ApiRequest {
        ApiRequest::get("restore-session")
    }
}

/// Instance management operations.
#[derive(Debug, Clone)]
pub struct ZApiInstance {
    client: ApiClient,
}

impl ZApiInstance {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// QR code for pairing, as raw bytes in the gateway's encoding.
    pub async fn qr_code(&self) -> ZApiResult<Value> {
        self.client.execute(requests::qr_code()).await
    }

    /// QR code as a base64 image data-URI under `value`.
    pub async fn qr_code_image(&self) -> ZApiResult<Value> {
        self.client.execute(requests::qr_code_image()).await
    }

    /// Fetch the QR image and decode it to PNG bytes.
    pub async fn qr_code_image_bytes(&self) -> ZApiResult<Vec<u8>> {
        let resp = self.qr_code_image().await?;
        let data_uri = resp["value"]
            .as_str()
            .ok_or_else(|| ZApiError::transport("No QR image value in response"))?;
        decode_data_uri(data_uri)
    }

    pub async fn restart_instance(&self) -> ZApiResult<Value> {
        let resp = self.client.execute(requests::restart_instance()).await?;
        info!("Restarted instance {}", self.client.config().instance_id);
        Ok(resp)
    }

    pub async fn disconnect(&self) -> ZApiResult<Value> {
        let resp = self.client.execute(requests::disconnect()).await?;
        info!("Disconnected instance {}", self.client.config().instance_id);
        Ok(resp)
    }

    /// Connection state of the instance.
    pub async fn status(&self) -> ZApiResult<Value> {
        self.client.execute(requests::status()).await
    }

    pub async fn restore_session(&self) -> ZApiResult<Value> {
        self.client.execute(requests::restore_session()).await
    }
}

/// Decode `data:<mime>;base64,<payload>` (or a bare base64 string).
pub fn decode_data_uri(data_uri: &str) -> ZApiResult<Vec<u8>> {
    let payload = match data_uri.split_once("base64,") {
        Some((_, rest)) => rest,
        None => data_uri,
    };
    STANDARD
        .decode(payload.trim())
        .map_err(|e| ZApiError::transport(format!("Invalid base64 image: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mock_client, MOCK_BASE_ENDPOINT};
    use crate::types::HttpVerb;
    use serde_json::json;

    #[test]
    fn test_paths() {
        let cases = [
            (requests::qr_code(), "qr-code"),
            (requests::qr_code_image(), "qr-code/image"),
            (requests::restart_instance(), "restart"),
            (requests::disconnect(), "disconnect"),
            (requests::status(), "status"),
            (requests::restore_session(), "restore-session"),
        ];
        for (req, path) in cases {
            assert_eq!(req.verb, HttpVerb::Get);
            assert_eq!(req.path, path);
            assert_eq!(req.body, json!({}));
        }
    }

    #[test]
    fn test_restart_is_not_the_qr_image_path() {
        assert_ne!(requests::restart_instance(), requests::qr_code_image());
    }

    #[test]
    fn test_decode_data_uri() {
        assert_eq!(decode_data_uri("data:image/png;base64,aGVsbG8=").unwrap(), b"hello");
        assert_eq!(decode_data_uri("aGVsbG8=").unwrap(), b"hello");
        assert!(decode_data_uri("data:image/png;base64,@@@").unwrap_err().is_transport());
    }

    #[tokio::test]
    async fn test_status_issues_one_get() {
        let (client, transport) = mock_client();
        transport.respond_json(json!({"connected": true, "smartphoneConnected": true}));
        let instance = ZApiInstance::new(client);

        let resp = instance.status().await.unwrap();
        assert_eq!(resp["connected"], true);

        let call = transport.only_call();
        assert_eq!(call.verb, HttpVerb::Get);
        assert_eq!(call.url, format!("{}status", MOCK_BASE_ENDPOINT));
    }

    #[tokio::test]
    async fn test_qr_code_image_bytes() {
        let (client, transport) = mock_client();
        transport.respond_json(json!({"value": "data:image/png;base64,iVBORw=="}));
        let instance = ZApiInstance::new(client);

        let bytes = instance.qr_code_image_bytes().await.unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
        assert!(transport.only_call().url.ends_with("/qr-code/image"));
    }

    #[tokio::test]
    async fn test_qr_code_image_bytes_missing_value() {
        let (client, transport) = mock_client();
        transport.respond_json(json!({"connected": true}));
        let err = ZApiInstance::new(client).qr_code_image_bytes().await.unwrap_err();
        assert!(err.is_transport());
    }
}
