//! Board Controller
//!
//! Page lifecycle for the Lost & Found board: load and render items, drive the
//! item/contact modals, send contact emails, delete and update items.
//!
//! All handlers take `&self`. State sits in `RefCell`s that are only borrowed
//! between awaits, so overlapping handlers on the event loop never collide on
//! a borrow.

mod modal;

#[cfg(test)]
mod tests;

use std::cell::RefCell;
use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::config::BoardConfig;
use crate::domain::{ContactDraft, ContactForm, ContactMessage, Item, ItemId, ItemPatch};
use crate::gateway::{EmailGateway, StorageGateway};
use crate::stats::BoardStats;
use crate::view::{BoardView, ModalKind, Notice};

pub use modal::ModalState;

const NOT_READY_MESSAGE: &str = "Storage system not ready. Please refresh the page.";
const LOAD_FAILED_MESSAGE: &str = "Failed to load items. Please refresh the page.";
const STILL_EXISTS_MESSAGE: &str = "CRITICAL ERROR: Item still exists after deletion. Please check the database.";
const UPDATE_LOST_MESSAGE: &str = "CRITICAL ERROR: Update was not saved. Please check the database.";

/// Read-through copy of the store's collection
#[derive(Debug, Default)]
struct ItemCache {
    current: Vec<Item>,
    filtered: Vec<Item>,
}

impl ItemCache {
    /// Replace everything, keeping the first item seen for each id
    fn replace(&mut self, items: Vec<Item>) {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(items.len());
        for item in items {
            if seen.insert(item.id.clone()) {
                unique.push(item);
            } else {
                log::warn!("Dropping duplicate item id {} from storage response", item.id);
            }
        }
        self.filtered = unique.clone();
        self.current = unique;
    }

    fn remove(&mut self, id: &ItemId) {
        self.current.retain(|item| &item.id != id);
        self.filtered.retain(|item| &item.id != id);
    }

    fn contains(&self, id: &ItemId) -> bool {
        self.current.iter().any(|item| &item.id == id)
    }
}

/// Holds a control disabled until dropped
struct Busy<'a, V: BoardView> {
    view: &'a V,
    set: fn(&V, bool),
}

impl<'a, V: BoardView> Busy<'a, V> {
    fn new(view: &'a V, set: fn(&V, bool)) -> Self {
        set(view, true);
        Self { view, set }
    }
}

impl<V: BoardView> Drop for Busy<'_, V> {
    fn drop(&mut self) {
        (self.set)(self.view, false);
    }
}

pub struct BoardController<S, E, V> {
    storage: S,
    email: E,
    view: V,
    recent_window_days: i64,
    clock: fn() -> DateTime<Utc>,
    cache: RefCell<ItemCache>,
    modal: RefCell<ModalState>,
}

impl<S, E, V> BoardController<S, E, V>
where
    S: StorageGateway,
    E: EmailGateway,
    V: BoardView,
{
    pub fn new(storage: S, email: E, view: V) -> Self {
        Self {
            storage,
            email,
            view,
            recent_window_days: BoardConfig::default().recent_window_days,
            clock: Utc::now,
            cache: RefCell::new(ItemCache::default()),
            modal: RefCell::new(ModalState::default()),
        }
    }

    pub fn with_config(mut self, config: &BoardConfig) -> Self {
        self.recent_window_days = config.recent_window_days;
        self
    }

    /// Replace the source of "now" used for the recent counter
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn email(&self) -> &E {
        &self.email
    }

    /// Items currently listed
    pub fn items(&self) -> Vec<Item> {
        self.cache.borrow().filtered.clone()
    }

    pub fn selected(&self) -> Option<Item> {
        self.modal.borrow().selected().cloned()
    }

    pub fn modal(&self) -> ModalKind {
        self.modal.borrow().kind()
    }

    pub fn format_date(&self, timestamp: &DateTime<Utc>) -> String {
        self.storage.format_date(timestamp)
    }

    // ========================
    // Loading & rendering
    // ========================

    /// Wait for the store, then replace the cached collection and re-render.
    /// Failures end in the error panel; returns whether items were loaded.
    pub async fn load_items(&self) -> bool {
        self.view.set_loading(true);

        log::info!("Waiting for storage to initialize...");
        if let Err(e) = self.storage.ready().await {
            log::warn!("Storage initialization timeout: {}", e);
            self.view.set_loading(false);
            self.view.show_load_error(NOT_READY_MESSAGE);
            return false;
        }

        match self.storage.get_items().await {
            Ok(items) => {
                log::info!("Loaded {} items from storage", items.len());
                self.cache.borrow_mut().replace(items);
                self.view.set_loading(false);
                self.render_items();
                true
            }
            Err(e) => {
                log::error!("Error loading items: {}", e);
                self.view.set_loading(false);
                self.view.show_load_error(LOAD_FAILED_MESSAGE);
                false
            }
        }
    }

    /// Re-fetch everything; used for the store's "items updated" push
    pub async fn refresh(&self) -> bool {
        self.load_items().await
    }

    pub fn render_items(&self) {
        {
            let cache = self.cache.borrow();
            log::debug!("Rendering {} items", cache.filtered.len());
            self.view.set_item_list(&cache.filtered);
        }
        self.update_summary();
    }

    pub fn update_summary(&self) {
        let stats = self.get_stats();
        let shown = self.cache.borrow().filtered.len();
        self.view.set_stats(&stats, shown);
    }

    pub fn get_stats(&self) -> BoardStats {
        BoardStats::compute(&self.cache.borrow().current, (self.clock)(), self.recent_window_days)
    }

    // ========================
    // Modals
    // ========================

    pub fn show_item_modal(&self, item: Item) {
        self.modal.borrow_mut().select(item.clone());
        self.view.show_modal(ModalKind::ItemOpen, Some(&item));
    }

    pub fn close_modal(&self) {
        self.modal.borrow_mut().close();
        self.view.show_modal(ModalKind::Closed, None);
    }

    /// Open the contact form for the selected item. Nothing happens when no
    /// item is open.
    pub fn contact_owner(&self) {
        let item = {
            let mut modal = self.modal.borrow_mut();
            if !modal.open_contact() {
                return;
            }
            match modal.selected() {
                Some(item) => item.clone(),
                None => return,
            }
        };
        self.view.set_contact_draft(&ContactDraft::for_item(&item));
        self.view.show_modal(ModalKind::ContactOpen, Some(&item));
    }

    pub fn close_contact_modal(&self) {
        if self.modal.borrow_mut().close_contact() {
            self.view.show_modal(ModalKind::Closed, None);
        }
    }

    /// Escape closes every modal, the mail-client options included
    pub fn handle_escape(&self) {
        self.view.dismiss_mail_fallback();
        self.close_contact_modal();
        if self.modal() != ModalKind::Closed {
            self.close_modal();
        }
    }

    /// A click that landed on a modal's backdrop
    pub fn handle_backdrop_click(&self, kind: ModalKind) {
        match kind {
            ModalKind::ItemOpen => self.close_modal(),
            ModalKind::ContactOpen => self.close_contact_modal(),
            ModalKind::Closed => {}
        }
    }

    // ========================
    // Contact
    // ========================

    /// Validate and send the contact form. Returns whether the gateway
    /// reported success.
    pub async fn handle_contact_submit(&self, form: ContactForm) -> bool {
        if !form.is_complete() {
            self.view.notify(Notice::error("Please fill in all fields"));
            return false;
        }
        let Some(item) = self.selected() else {
            self.view.notify(Notice::error("No item selected"));
            return false;
        };

        let message = ContactMessage::for_item(&item, &form);
        let _sending = Busy::new(&self.view, V::set_sending);

        log::info!("Attempting to send contact email about {:?}", item.title);
        match self.email.send_contact_email(&message).await {
            Ok(report) if report.success => {
                if let Some(fallback) = &report.fallback {
                    self.view.present_mail_fallback(fallback);
                }
                self.view.notify(Notice::success(report.message));
                self.close_contact_modal();
                self.view.reset_contact_form();
                true
            }
            Ok(report) => {
                self.view.notify(Notice::error(report.message));
                false
            }
            Err(e) => {
                log::error!("Error sending contact email: {}", e);
                self.view.notify(Notice::error("Failed to send message. Please try again."));
                false
            }
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Delete the selected item after confirmation, then reload and make sure
    /// it is really gone. Returns whether the deletion was confirmed.
    pub async fn delete_item(&self) -> bool {
        let Some(item) = self.selected() else {
            return false;
        };
        if !self.view.confirm(&delete_prompt(&item.title)) {
            log::info!("User cancelled deletion of {}", item.id);
            return false;
        }

        let _deleting = Busy::new(&self.view, V::set_deleting);
        let count_before = self.cache.borrow().current.len();

        log::info!("Deleting item {}", item.id);
        if let Err(e) = self.storage.delete_item(&item.id).await {
            log::error!("Delete of {} failed: {}", item.id, e);
            let notice = if e.is_consistency_violation() {
                Notice::critical(format!("CRITICAL ERROR: {}", e))
            } else {
                Notice::error("Failed to delete item. The item may still exist in the database.")
            };
            self.view.notify(notice);
            return false;
        }

        self.cache.borrow_mut().remove(&item.id);
        self.view.remove_item(&item.id);
        self.update_summary();
        self.close_modal();

        if !self.load_items().await {
            self.view.notify(Notice::error(format!(
                "\"{}\" was deleted but the list could not be refreshed to confirm it.",
                item.title
            )));
            return false;
        }

        let (still_exists, count_after) = {
            let cache = self.cache.borrow();
            (cache.contains(&item.id), cache.current.len())
        };
        if still_exists {
            log::error!("Item {} still exists after deletion", item.id);
            self.view.notify(Notice::critical(STILL_EXISTS_MESSAGE));
            return false;
        }

        let removed = count_before.saturating_sub(count_after);
        log::info!("Confirmed deletion of {} ({} item(s) removed)", item.id, removed);
        self.view.notify(Notice::success(format!(
            "\"{}\" has been permanently deleted. ({} item(s) removed)",
            item.title, removed
        )));
        true
    }

    /// Apply `patch` to the selected item, then reload and check the store
    /// kept it. Returns whether the update was confirmed.
    pub async fn update_item(&self, patch: ItemPatch) -> bool {
        let Some(item) = self.selected() else {
            self.view.notify(Notice::error("No item selected"));
            return false;
        };
        if patch.is_empty() {
            self.view.notify(Notice::error("Nothing to update"));
            return false;
        }

        log::info!("Updating item {}", item.id);
        match self.storage.update_item(&item.id, &patch).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                log::error!("Update of {} returned nothing", item.id);
                self.view.notify(Notice::error("Failed to update item."));
                return false;
            }
            Err(e) => {
                log::error!("Update of {} failed: {}", item.id, e);
                let notice = if e.is_consistency_violation() {
                    Notice::critical(format!("CRITICAL ERROR: {}", e))
                } else {
                    Notice::error("Failed to update item.")
                };
                self.view.notify(notice);
                return false;
            }
        }

        self.close_modal();
        if !self.load_items().await {
            self.view.notify(Notice::error("Item updated but the list could not be refreshed to confirm it."));
            return false;
        }

        let saved = self
            .cache
            .borrow()
            .current
            .iter()
            .find(|candidate| candidate.id == item.id)
            .map_or(false, |stored| stored.reflects(&patch));
        if !saved {
            log::error!("Item {} does not reflect its update after reload", item.id);
            self.view.notify(Notice::critical(UPDATE_LOST_MESSAGE));
            return false;
        }

        let title = patch.title.as_deref().unwrap_or(&item.title);
        self.view.notify(Notice::success(format!("\"{}\" has been updated.", title)));
        true
    }
}

fn delete_prompt(title: &str) -> String {
    format!(
        "⚠️ PERMANENT DELETION WARNING ⚠️\n\n\
         Are you absolutely sure you want to PERMANENTLY DELETE:\n\
         \"{}\"?\n\n\
         This action will:\n\
         • Remove the item completely from the database\n\
         • Cannot be undone or recovered\n\
         • Make the item invisible to all users\n\n\
         Click OK to PERMANENTLY DELETE or Cancel to keep the item.",
        title
    )
}
