//! Group management.
//!
//! Create groups, rename them, manage admins and participants, leave, and
//! read metadata.

use crate::api_client::ApiClient;
use crate::error::ZApiResult;
use log::info;
use serde_json::Value;

/// Pure request builders for the group endpoints.
pub mod requests {
    use crate::types::ApiRequest;
    use serde_json::json;

    pub fn create_group(group_name: &str, phones: &[&str]) -> ApiRequest {
        ApiRequest::post(
            "create-group",
            json!({
                "groupName": group_name,
                "phones": phones,
            }),
        )
    }

    pub fn update_group_name(group_id: &str, group_name: &str) -> ApiRequest {
        ApiRequest::post(
            "update-group-name",
            json!({
                "groupId": group_id,
                "groupName": group_name,
            }),
        )
    }

    /// `add-admin`, `remove-admin`, `add-participant`, `remove-participant`
    /// share one body shape.
    fn membership(path: &str, group_id: &str, phones: &[&str]) -> ApiRequest {
        ApiRequest::post(
            path,
            json!({
                "groupId": group_id,
                "phones": phones,
            }),
        )
    }

    pub fn add_admin(group_id: &str, phones: &[&str]) -> ApiRequest {
        membership("add-admin", group_id, phones)
    }

    pub fn remove_admin(group_id: &str, phones: &[&str]) -> ApiRequest {
        membership("remove-admin", group_id, phones)
    }

    pub fn add_participant(group_id: &str, phones: &[&str]) -> ApiRequest {
        membership("add-participant", group_id, phones)
    }

    pub fn remove_participant(group_id: &str, phones: &[&str]) -> ApiRequest {
        membership("remove-participant", group_id, phones)
    }

    pub fn leave_group(group_id: &str) -> ApiRequest {
        ApiRequest::post("leave-group", json!({ "groupId": group_id }))
    }

    pub fn group_metadata(group_phone_id: &str) -> ApiRequest {
        ApiRequest::get(format!("group-metadata/{}", group_phone_id))
    }
}

/// Group management operations.
#[derive(Debug, Clone)]
pub struct ZApiGroups {
    client: ApiClient,
}

impl ZApiGroups {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create a group with the given participants.
    pub async fn create_group(&self, group_name: &str, phones: &[&str]) -> ZApiResult<Value> {
        let resp = self
            .client
            .execute(requests::create_group(group_name, phones))
            .await?;
        info!("Created group '{}' with {} participants", group_name, phones.len());
        Ok(resp)
    }

    pub async fn update_group_name(&self, group_id: &str, group_name: &str) -> ZApiResult<Value> {
        let resp = self
            .client
            .execute(requests::update_group_name(group_id, group_name))
            .await?;
        info!("Renamed group {} to '{}'", group_id, group_name);
        Ok(resp)
    }

    /// Promote participants to admin.
    pub async fn add_admin(&self, group_id: &str, phones: &[&str]) -> ZApiResult<Value> {
        self.client
            .execute(requests::add_admin(group_id, phones))
            .await
    }

    /// Demote admins back to participants.
    pub async fn remove_admin(&self, group_id: &str, phones: &[&str]) -> ZApiResult<Value> {
        self.client
            .execute(requests::remove_admin(group_id, phones))
            .await
    }

    pub async fn add_participant(&self, group_id: &str, phones: &[&str]) -> ZApiResult<Value> {
        let resp = self
            .client
            .execute(requests::add_participant(group_id, phones))
            .await?;
        info!("Added {} participants to group {}", phones.len(), group_id);
        Ok(resp)
    }

    pub async fn remove_participant(&self, group_id: &str, phones: &[&str]) -> ZApiResult<Value> {
        let resp = self
            .client
            .execute(requests::remove_participant(group_id, phones))
            .await?;
        info!("Removed {} participants from group {}", phones.len(), group_id);
        Ok(resp)
    }

    pub async fn leave_group(&self, group_id: &str) -> ZApiResult<Value> {
        let resp = self.client.execute(requests::leave_group(group_id)).await?;
        info!("Left group {}", group_id);
        Ok(resp)
    }

    /// Metadata for the group keyed by `{phone}-{id}`.
    pub async fn group_metadata(&self, group_phone_id: &str) -> ZApiResult<Value> {
        self.client
            .execute(requests::group_metadata(group_phone_id))
            .await
    }
}
