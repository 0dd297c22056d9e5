//! Contact listing and lookup.
//!
//! Check whether phone numbers are on WhatsApp before sending messages,
//! page through the address book, and fetch profile pictures.

use crate::api_client::ApiClient;
use crate::error::ZApiResult;
use crate::types::Pagination;
use serde_json::Value;

/// Pure request builders for the contact endpoints.
pub mod requests {
    use crate::types::{ApiRequest, Pagination};
    use url::form_urlencoded;

    pub fn contacts(pagination: Pagination) -> ApiRequest {
        ApiRequest::get(format!("contacts?{}", pagination.query()))
    }

    pub fn contact_by_phone(phone: &str) -> ApiRequest {
        ApiRequest::get(format!("contacts/{}", phone))
    }

    pub fn profile_picture(phone: &str) -> ApiRequest {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("phone", phone)
            .finish();
        ApiRequest::get(format!("profile-picture?{}", query))
    }

    pub fn phone_exists(phone: &str) -> ApiRequest {
        ApiRequest::get(format!("phone-exists/{}", phone))
    }
}

/// Contact-related operations.
#[derive(Debug, Clone)]
pub struct ZApiContacts {
    client: ApiClient,
}

impl ZApiContacts {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// One page of contacts.
    pub async fn contacts(&self, pagination: Pagination) -> ZApiResult<Value> {
        self.client.execute(requests::contacts(pagination)).await
    }

    /// First page of 15 contacts.
    pub async fn contacts_default(&self) -> ZApiResult<Value> {
        self.contacts(Pagination::default()).await
    }

    pub async fn contact_by_phone(&self, phone: &str) -> ZApiResult<Value> {
        self.client.execute(requests::contact_by_phone(phone)).await
    }

    /// Profile picture link for `phone`.
    pub async fn profile_picture(&self, phone: &str) -> ZApiResult<Value> {
        self.client.execute(requests::profile_picture(phone)).await
    }

    /// Whether `phone` is registered on WhatsApp. The gateway answers
    /// `{"exists": bool}`; the value is returned as-is.
    pub async fn phone_exists(&self, phone: &str) -> ZApiResult<Value> {
        self.client.execute(requests::phone_exists(phone)).await
    }
}
