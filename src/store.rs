//! Global Application State Store
//!
//! Everything the page renders, written by the board's view binding and read
//! by components. Uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{BoardStats, Item, ItemId, MailtoFallback, ModalKind, Toast};

#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Cards currently listed
    pub items: Vec<Item>,
    pub loading: bool,
    /// Set when the last load failed; replaces the grid
    pub load_error: Option<String>,
    /// Cards playing their fade-out before removal
    pub fading: Vec<ItemId>,
    pub stats: BoardStats,
    /// Number of cards listed, as last reported with the stats
    pub shown: usize,
    pub modal: ModalKind,
    pub selected: Option<Item>,
    pub contact_subject: String,
    pub contact_message: String,
    pub contact_email: String,
    pub sending: bool,
    pub deleting: bool,
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
    /// Mail-client options offered when the relay is not configured
    pub fallback: Option<MailtoFallback>,
}

/// Type alias for the store
pub type AppStore = Store<BoardState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Start fading a card out of the list
pub fn store_begin_fade(store: &AppStore, id: ItemId) {
    store.fading().write().push(id);
}

/// List `items`, cancelling any fade still in progress
pub fn store_set_items(store: &AppStore, items: Vec<Item>) {
    store.fading().set(Vec::new());
    store.load_error().set(None);
    store.items().set(items);
}

/// Drop a faded card for good. A card that is no longer fading was listed
/// again by a reload and stays.
pub fn store_remove_item(store: &AppStore, id: &ItemId) {
    if !store.fading().with_untracked(|fading| fading.contains(id)) {
        return;
    }
    store.items().write().retain(|item| &item.id != id);
    store.fading().write().retain(|fading| fading != id);
}

/// Queue a toast and return its id
pub fn store_push_toast(store: &AppStore, notice: crate::models::Notice) -> u32 {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id.wrapping_add(1));
    store.toasts().write().push(Toast { id, notice });
    id
}

pub fn store_dismiss_toast(store: &AppStore, id: u32) {
    store.toasts().write().retain(|toast| toast.id != id);
}

/// Clear the contact form fields
pub fn store_reset_contact(store: &AppStore) {
    store.contact_subject().set(String::new());
    store.contact_message().set(String::new());
    store.contact_email().set(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemType;
    use chrono::Utc;

    fn keys() -> Item {
        Item::new(1, "Keys", ItemType::Lost, Utc::now())
    }

    #[test]
    fn test_faded_card_is_removed() {
        let store = Store::new(BoardState::default());
        store_set_items(&store, vec![keys()]);

        store_begin_fade(&store, ItemId::from(1));
        store_remove_item(&store, &ItemId::from(1));

        assert!(store.items().get_untracked().is_empty());
        assert!(store.fading().get_untracked().is_empty());
    }

    #[test]
    fn test_reload_cancels_pending_fade() {
        let store = Store::new(BoardState::default());
        store_set_items(&store, vec![keys()]);

        store_begin_fade(&store, ItemId::from(1));
        // the item came back in a reload before the fade finished
        store_set_items(&store, vec![keys()]);
        store_remove_item(&store, &ItemId::from(1));

        assert_eq!(store.items().get_untracked().len(), 1);
    }
}
