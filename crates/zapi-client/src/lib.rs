//! # zapi-client: Z-API WhatsApp Gateway Client
//!
//! Async client for the [Z-API](https://z-api.io) HTTP gateway. One method
//! per endpoint; each call validates its enumerated arguments, builds a
//! single request relative to
//! `https://api.z-api.io/instances/{instanceId}/token/{tokenId}/`, and
//! returns the decoded JSON answer untouched.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |---|---|
//! | [`types`] | Configuration, request value, verbs, document extensions, pagination |
//! | [`error`] | `ZApiError` with `InvalidArgument` / `TransportError` codes |
//! | [`transport`] | `Transport` trait and the `reqwest` backend |
//! | [`api_client`] | Dispatcher: verb check, one HTTP call, JSON decode |
//! | [`instance`] | QR code, restart, disconnect, status, restore session |
//! | [`messaging`] | Text, contact cards, media from URL, links, read/delete |
//! | [`status`] | Text and image status posts |
//! | [`chats`] | Chat listing and chat messages |
//! | [`contacts`] | Paged contacts, lookup, profile picture, phone-exists |
//! | [`groups`] | Create, rename, admins, participants, leave, metadata |
//! | [`queue`] | Send-queue listing and removal |
//! | [`service`] | `ZApi` handle tying the groups together |
//!
//! ```no_run
//! # async fn run() -> zapi_client::ZApiResult<()> {
//! use zapi_client::{ZApi, ZApiConfig};
//!
//! let zapi = ZApi::new(ZApiConfig::new("MY_INSTANCE", "MY_TOKEN"))?;
//! let sent = zapi.messaging().send_text("5511999999999", "hi").await?;
//! println!("{}", sent["messageId"]);
//! # Ok(())
//! # }
//! ```

pub mod types;
pub mod error;
pub mod transport;
pub mod api_client;
pub mod instance;
pub mod messaging;
pub mod status;
pub mod chats;
pub mod contacts;
pub mod groups;
pub mod queue;
pub mod service;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

// Re-exports
pub use api_client::ApiClient;
pub use error::{ZApiError, ZApiErrorCode, ZApiResult};
pub use service::ZApi;
pub use transport::{ReqwestTransport, Transport, TransportResponse};
pub use types::*;
