//! In-process storage backend
//!
//! Keeps the collection in memory and can be told to misbehave the way the
//! hosted store has been seen to (never ready, failing reads, deletes that
//! report success without removing anything).

use std::cell::RefCell;

use async_trait::async_trait;

use super::StorageGateway;
use crate::domain::{DomainError, DomainResult, Item, ItemId, ItemPatch};

/// Misbehaviour to inject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFault {
    /// `ready()` never succeeds
    NeverReady,
    /// `get_items()` fails
    FailingFetch,
    /// The next `get_items()` fails, later ones succeed
    FailingFetchOnce,
    /// `delete_item()` reports success but keeps the item
    StaleDelete,
    /// `delete_item()` is refused with `Conflict`
    RejectDelete,
    /// `update_item()` echoes the patched item but does not persist it
    IgnoreUpdates,
    /// `update_item()` fails with a backend error
    FailingUpdate,
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<Vec<Item>>,
    faults: RefCell<Vec<StorageFault>>,
    calls: RefCell<Vec<&'static str>>,
}

impl MemoryStorage {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: RefCell::new(items),
            ..Default::default()
        }
    }

    pub fn with_fault(self, fault: StorageFault) -> Self {
        self.inject(fault);
        self
    }

    /// Start misbehaving from the next call on
    pub fn inject(&self, fault: StorageFault) {
        self.faults.borrow_mut().push(fault);
    }

    pub fn clear_faults(&self) {
        self.faults.borrow_mut().clear();
    }

    pub fn snapshot(&self) -> Vec<Item> {
        self.items.borrow().clone()
    }

    /// Names of the gateway operations invoked so far, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn has(&self, fault: StorageFault) -> bool {
        self.faults.borrow().contains(&fault)
    }

    /// Consume a one-shot fault; true when it was armed
    fn take(&self, fault: StorageFault) -> bool {
        let mut faults = self.faults.borrow_mut();
        match faults.iter().position(|f| *f == fault) {
            Some(pos) => {
                faults.remove(pos);
                true
            }
            None => false,
        }
    }

    fn record(&self, op: &'static str) {
        self.calls.borrow_mut().push(op);
    }
}

#[async_trait(?Send)]
impl StorageGateway for MemoryStorage {
    async fn ready(&self) -> DomainResult<()> {
        self.record("ready");
        if self.has(StorageFault::NeverReady) {
            return Err(DomainError::NotReady("memory storage held back".into()));
        }
        Ok(())
    }

    async fn get_items(&self) -> DomainResult<Vec<Item>> {
        self.record("get_items");
        if self.has(StorageFault::FailingFetch) || self.take(StorageFault::FailingFetchOnce) {
            return Err(DomainError::Backend("fetch failed".into()));
        }
        Ok(self.snapshot())
    }

    async fn delete_item(&self, id: &ItemId) -> DomainResult<()> {
        self.record("delete_item");
        if self.has(StorageFault::RejectDelete) {
            return Err(DomainError::Conflict(format!("delete of {} was not applied", id)));
        }
        let mut items = self.items.borrow_mut();
        let Some(pos) = items.iter().position(|item| &item.id == id) else {
            return Err(DomainError::NotFound(format!("item {}", id)));
        };
        if !self.has(StorageFault::StaleDelete) {
            items.remove(pos);
        }
        Ok(())
    }

    async fn update_item(&self, id: &ItemId, patch: &ItemPatch) -> DomainResult<Option<Item>> {
        self.record("update_item");
        if self.has(StorageFault::FailingUpdate) {
            return Err(DomainError::Backend(format!("update of {} failed", id)));
        }
        let mut items = self.items.borrow_mut();
        let Some(item) = items.iter_mut().find(|item| &item.id == id) else {
            return Ok(None);
        };
        if self.has(StorageFault::IgnoreUpdates) {
            let mut echoed = item.clone();
            echoed.apply(patch);
            return Ok(Some(echoed));
        }
        item.apply(patch);
        Ok(Some(item.clone()))
    }
}
