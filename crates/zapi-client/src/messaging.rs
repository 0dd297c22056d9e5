//! Send and manage messages: text, contact cards, media from URL, link
//! previews, read receipts and deletion.

use crate::api_client::ApiClient;
use crate::error::ZApiResult;
use crate::types::DocumentExtension;
use log::debug;
use serde_json::Value;

/// Pure request builders for the messaging endpoints.
pub mod requests {
    use crate::types::{ApiRequest, DocumentExtension};
    use serde_json::json;

    pub fn send_text(phone: &str, message: &str) -> ApiRequest {
        ApiRequest::post(
            "send-text",
            json!({
                "phone": phone,
                "message": message,
            }),
        )
    }

    pub fn send_contact(
        phone: &str,
        contact_name: &str,
        contact_phone: &str,
        contact_business_description: &str,
    ) -> ApiRequest {
        ApiRequest::post(
            "send-contact",
            json!({
                "phone": phone,
                "contactName": contact_name,
                "contactPhone": contact_phone,
                "contactBusinessDescription": contact_business_description,
            }),
        )
    }

    pub fn send_image_from_url(phone: &str, image_url: &str) -> ApiRequest {
        ApiRequest::post("send-image", json!({ "phone": phone, "image": image_url }))
    }

    pub fn send_audio_from_url(phone: &str, audio_url: &str) -> ApiRequest {
        ApiRequest::post("send-audio", json!({ "phone": phone, "audio": audio_url }))
    }

    pub fn send_video_from_url(phone: &str, video_url: &str) -> ApiRequest {
        ApiRequest::post("send-video", json!({ "phone": phone, "video": video_url }))
    }

    pub fn send_document_from_url(
        phone: &str,
        document_url: &str,
        extension: DocumentExtension,
    ) -> ApiRequest {
        ApiRequest::post(
            format!("send-document/{}", extension),
            json!({ "phone": phone, "document": document_url }),
        )
    }

    /// The link is appended to `message`, separated by one space.
    pub fn send_link(
        phone: &str,
        message: &str,
        image_url: &str,
        link_url: &str,
        title: &str,
        link_description: &str,
    ) -> ApiRequest {
        ApiRequest::post(
            "send-link",
            json!({
                "phone": phone,
                "message": format!("{} {}", message, link_url),
                "image": image_url,
                "linkUrl": link_url,
                "title": title,
                "linkDescription": link_description,
            }),
        )
    }

    pub fn read_message(phone: &str, message_id: &str) -> ApiRequest {
        ApiRequest::post(
            "read-message",
            json!({ "phone": phone, "messageId": message_id }),
        )
    }

    pub fn delete_message(phone: &str, message_id: &str, owner: bool) -> ApiRequest {
        ApiRequest::post(
            "delete-message",
            json!({
                "phone": phone,
                "messageId": message_id,
                "owner": owner,
            }),
        )
    }
}

/// Message sender bound to one instance.
#[derive(Debug, Clone)]
pub struct ZApiMessaging {
    client: ApiClient,
}

impl ZApiMessaging {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // ─── Text ────────────────────────────────────────────────────────

    /// Send a plain text message. `phone` is the full number, e.g. `5511999999999`.
    pub async fn send_text(&self, phone: &str, message: &str) -> ZApiResult<Value> {
        debug!("Sending text to {}", phone);
        self.client.execute(requests::send_text(phone, message)).await
    }

    /// Send a contact card.
    pub async fn send_contact(
        &self,
        phone: &str,
        contact_name: &str,
        contact_phone: &str,
        contact_business_description: &str,
    ) -> ZApiResult<Value> {
        self.client
            .execute(requests::send_contact(
                phone,
                contact_name,
                contact_phone,
                contact_business_description,
            ))
            .await
    }

    // ─── Media from URL ──────────────────────────────────────────────

    pub async fn send_image_from_url(&self, phone: &str, image_url: &str) -> ZApiResult<Value> {
        debug!("Sending image to {}", phone);
        self.client
            .execute(requests::send_image_from_url(phone, image_url))
            .await
    }

    pub async fn send_audio_from_url(&self, phone: &str, audio_url: &str) -> ZApiResult<Value> {
        debug!("Sending audio to {}", phone);
        self.client
            .execute(requests::send_audio_from_url(phone, audio_url))
            .await
    }

    pub async fn send_video_from_url(&self, phone: &str, video_url: &str) -> ZApiResult<Value> {
        debug!("Sending video to {}", phone);
        self.client
            .execute(requests::send_video_from_url(phone, video_url))
            .await
    }

    /// Send a document. `extension` must be one of
    /// pdf, docx, doc, xlsx, deb, gz, 7z, zip; anything else fails with
    /// `InvalidArgument` and nothing is sent.
    pub async fn send_document_from_url(
        &self,
        phone: &str,
        document_url: &str,
        extension: &str,
    ) -> ZApiResult<Value> {
        let extension: DocumentExtension = extension.parse()?;
        self.send_document(phone, document_url, extension).await
    }

    /// Typed variant of [`send_document_from_url`](Self::send_document_from_url).
    pub async fn send_document(
        &self,
        phone: &str,
        document_url: &str,
        extension: DocumentExtension,
    ) -> ZApiResult<Value> {
        debug!("Sending {} document to {}", extension, phone);
        self.client
            .execute(requests::send_document_from_url(phone, document_url, extension))
            .await
    }

    // ─── Links ───────────────────────────────────────────────────────

    /// Send a message with a link preview.
    pub async fn send_link(
        &self,
        phone: &str,
        message: &str,
        image_url: &str,
        link_url: &str,
        title: &str,
        link_description: &str,
    ) -> ZApiResult<Value> {
        self.client
            .execute(requests::send_link(
                phone,
                message,
                image_url,
                link_url,
                title,
                link_description,
            ))
            .await
    }

    // ─── Message management ──────────────────────────────────────────

    pub async fn read_message(&self, phone: &str, message_id: &str) -> ZApiResult<Value> {
        self.client
            .execute(requests::read_message(phone, message_id))
            .await
    }

    /// Delete a message. `owner` is true when the instance sent it.
    pub async fn delete_message(
        &self,
        phone: &str,
        message_id: &str,
        owner: bool,
    ) -> ZApiResult<Value> {
        self.client
            .execute(requests::delete_message(phone, message_id, owner))
            .await
    }
}
