//! Store-backed board view
//!
//! Implements the controller's `BoardView` by writing into the reactive
//! store; components re-render from there.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use lost_found_core::{BoardView, ContactDraft};

use crate::models::{BoardStats, Item, ItemId, MailtoFallback, ModalKind, Notice};
use crate::store::{
    store_begin_fade, store_dismiss_toast, store_push_toast, store_remove_item, store_reset_contact,
    store_set_items, AppStore, BoardStateStoreFields,
};

/// Length of the card fade-out
const FADE_OUT_MS: u32 = 300;

#[derive(Clone, Copy)]
pub struct StoreView {
    store: AppStore,
    notice_timeout_ms: u32,
}

impl StoreView {
    pub fn new(store: AppStore, notice_timeout_ms: u32) -> Self {
        Self { store, notice_timeout_ms }
    }
}

impl BoardView for StoreView {
    fn set_loading(&self, loading: bool) {
        if loading {
            self.store.items().set(Vec::new());
            self.store.load_error().set(None);
        }
        self.store.loading().set(loading);
    }

    fn set_item_list(&self, items: &[Item]) {
        store_set_items(&self.store, items.to_vec());
    }

    fn show_load_error(&self, message: &str) {
        self.store.items().set(Vec::new());
        self.store.load_error().set(Some(message.to_string()));
    }

    fn remove_item(&self, id: &ItemId) {
        let store = self.store;
        let id = id.clone();
        store_begin_fade(&store, id.clone());
        spawn_local(async move {
            TimeoutFuture::new(FADE_OUT_MS).await;
            store_remove_item(&store, &id);
        });
    }

    fn set_stats(&self, stats: &BoardStats, shown: usize) {
        self.store.stats().set(*stats);
        self.store.shown().set(shown);
    }

    fn show_modal(&self, kind: ModalKind, item: Option<&Item>) {
        self.store.selected().set(item.cloned());
        self.store.modal().set(kind);
    }

    fn set_contact_draft(&self, draft: &ContactDraft) {
        self.store.contact_subject().set(draft.subject.clone());
        self.store.contact_message().set(draft.message.clone());
    }

    fn reset_contact_form(&self) {
        store_reset_contact(&self.store);
    }

    fn set_sending(&self, busy: bool) {
        self.store.sending().set(busy);
    }

    fn set_deleting(&self, busy: bool) {
        self.store.deleting().set(busy);
    }

    fn notify(&self, notice: Notice) {
        log::debug!("Notice ({:?}): {}", notice.level, notice.text);
        let store = self.store;
        let timeout = self.notice_timeout_ms;
        let id = store_push_toast(&store, notice);
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            store_dismiss_toast(&store, id);
        });
    }

    fn confirm(&self, prompt: &str) -> bool {
        window().confirm_with_message(prompt).unwrap_or(false)
    }

    fn present_mail_fallback(&self, fallback: &MailtoFallback) {
        self.store.fallback().set(Some(fallback.clone()));
    }

    fn dismiss_mail_fallback(&self) {
        if self.store.fallback().with_untracked(|fallback| fallback.is_some()) {
            self.store.fallback().set(None);
        }
    }
}
