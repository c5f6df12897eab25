//! Gateway Layer
//!
//! Abstract interfaces to the two hosted services the board depends on.
//! The browser crate implements them on top of the JS SDKs; `MemoryStorage`
//! backs the tests.

mod email;
mod memory;


use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{ContactMessage, DomainResult, Item, ItemId, ItemPatch};
use crate::mailto::MailtoFallback;

pub use email::{EmailRelay, RelayEmailGateway, TemplateParams};
pub use memory::{MemoryStorage, StorageFault};

/// Item persistence backed by the hosted data store.
///
/// Every call may be slow and may fail. Futures are `?Send`: the board runs
/// on the single browser event loop.
#[async_trait(?Send)]
pub trait StorageGateway {
    /// Resolves once the backend finished initialising, or fails with
    /// `DomainError::NotReady` when it gives up waiting.
    async fn ready(&self) -> DomainResult<()>;

    /// The full live collection
    async fn get_items(&self) -> DomainResult<Vec<Item>>;

    /// Remove an item. `NotFound` when the id is unknown, `Conflict` when the
    /// backend refused to apply the removal.
    async fn delete_item(&self, id: &ItemId) -> DomainResult<()>;

    /// Apply a partial update; `None` when the backend returned nothing.
    async fn update_item(&self, id: &ItemId, patch: &ItemPatch) -> DomainResult<Option<Item>>;

    /// Human readable report date ("Oct 19, 2026")
    fn format_date(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp.format("%b %-d, %Y").to_string()
    }
}

/// Outcome of one contact attempt.
///
/// With the fallback path `success` means "options were shown to the
/// visitor", not "email delivered".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendReport {
    pub success: bool,
    pub message: String,
    pub fallback: Option<MailtoFallback>,
}

impl SendReport {
    pub fn sent(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into(), fallback: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into(), fallback: None }
    }

    pub fn fallback(fallback: MailtoFallback) -> Self {
        Self {
            success: true,
            message: "Contact options displayed".to_string(),
            fallback: Some(fallback),
        }
    }
}

/// Outbound email through the hosted relay
#[async_trait(?Send)]
pub trait EmailGateway {
    async fn send_contact_email(&self, message: &ContactMessage) -> DomainResult<SendReport>;
}
