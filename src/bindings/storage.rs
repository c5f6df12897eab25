//! Storage Gateway over `window.storage`
//!
//! The hosted store's browser client sets `isReady` once it has connected and
//! exposes promise-returning CRUD methods.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;

use lost_found_core::{DomainError, DomainResult, Item, ItemId, ItemPatch, StorageConfig, StorageGateway};

use super::js_error;

#[wasm_bindgen]
extern "C" {
    type JsStorage;

    #[wasm_bindgen(method, getter, js_name = isReady)]
    fn is_ready(this: &JsStorage) -> JsValue;

    #[wasm_bindgen(method, catch, js_name = getItems)]
    async fn get_items(this: &JsStorage) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = deleteItem)]
    async fn delete_item(this: &JsStorage, id: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = updateItem)]
    async fn update_item(this: &JsStorage, id: JsValue, patch: JsValue) -> Result<JsValue, JsValue>;
}

/// Look up `window.storage`; it may be installed after the board starts
fn js_storage() -> Option<JsStorage> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str("storage")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(value.unchecked_into())
}

fn connected() -> DomainResult<JsStorage> {
    js_storage().ok_or_else(|| DomainError::NotReady("window.storage is not available".into()))
}

fn id_to_js(id: &ItemId) -> DomainResult<JsValue> {
    serde_wasm_bindgen::to_value(id).map_err(|e| DomainError::InvalidInput(e.to_string()))
}

/// `deleteItem` resolves `true` once the row is gone. A throw means the store
/// may be half way through the removal.
fn delete_outcome(id: &ItemId, result: Result<Option<bool>, String>) -> DomainResult<()> {
    match result {
        Ok(Some(true)) => Ok(()),
        Ok(_) => Err(DomainError::Backend(format!("storage did not delete item {}", id))),
        Err(thrown) => Err(DomainError::Conflict(thrown)),
    }
}

pub struct WindowStorage {
    poll_interval_ms: u32,
    poll_attempts: u32,
}

impl WindowStorage {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            poll_interval_ms: config.ready_poll_interval_ms,
            poll_attempts: config.ready_poll_attempts,
        }
    }

    fn is_ready_now(&self) -> bool {
        js_storage().map_or(false, |storage| storage.is_ready().as_bool() == Some(true))
    }
}

#[async_trait(?Send)]
impl StorageGateway for WindowStorage {
    async fn ready(&self) -> DomainResult<()> {
        let mut attempts = 0;
        while !self.is_ready_now() && attempts < self.poll_attempts {
            TimeoutFuture::new(self.poll_interval_ms).await;
            attempts += 1;
        }
        if self.is_ready_now() {
            log::debug!("Storage ready after {} polls", attempts);
            return Ok(());
        }
        Err(DomainError::NotReady(format!(
            "not ready after {} ms",
            u64::from(self.poll_interval_ms) * u64::from(self.poll_attempts)
        )))
    }

    async fn get_items(&self) -> DomainResult<Vec<Item>> {
        let result = connected()?
            .get_items()
            .await
            .map_err(|e| DomainError::Backend(js_error(e)))?;
        serde_wasm_bindgen::from_value(result).map_err(|e| DomainError::Backend(e.to_string()))
    }

    async fn delete_item(&self, id: &ItemId) -> DomainResult<()> {
        let result = connected()?
            .delete_item(id_to_js(id)?)
            .await
            .map(|value| value.as_bool())
            .map_err(js_error);
        delete_outcome(id, result)
    }

    async fn update_item(&self, id: &ItemId, patch: &ItemPatch) -> DomainResult<Option<Item>> {
        let js_patch = serde_wasm_bindgen::to_value(patch).map_err(|e| DomainError::InvalidInput(e.to_string()))?;
        let result = connected()?
            .update_item(id_to_js(id)?, js_patch)
            .await
            .map_err(|e| DomainError::Backend(js_error(e)))?;
        if result.is_null() || result.is_undefined() {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(result)
            .map(Some)
            .map_err(|e| DomainError::Backend(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thrown_delete_is_a_consistency_violation() {
        let err = delete_outcome(&ItemId::from(4), Err("row is locked".into())).unwrap_err();
        assert!(err.is_consistency_violation());
        assert_eq!(err, DomainError::Conflict("row is locked".into()));
    }

    #[test]
    fn test_unacknowledged_delete_is_plain_failure() {
        assert!(delete_outcome(&ItemId::from(4), Ok(Some(true))).is_ok());
        for answer in [Some(false), None] {
            let err = delete_outcome(&ItemId::from(4), Ok(answer)).unwrap_err();
            assert!(!err.is_consistency_violation());
        }
    }
}
