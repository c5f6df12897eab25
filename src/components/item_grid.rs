//! Item Grid Component
//!
//! Loading indicator, error panel, empty state and the card grid. The grid is
//! rebuilt from scratch whenever the item list changes.

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::context::use_app_context;
use crate::store::{use_app_store, BoardStateStoreFields};

#[component]
pub fn ItemGrid() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let retry = move |_| {
        ctx.spawn(|board| async move {
            board.load_items().await;
        });
    };

    let show_empty = move || {
        !store.loading().get()
            && store.load_error().with(|err| err.is_none())
            && store.items().with(|items| items.is_empty())
    };

    view! {
        <section class="items-section">
            <Show when=move || store.loading().get()>
                <div id="loading" class="loading">
                    <div class="spinner"></div>
                    <p>"Loading items..."</p>
                </div>
            </Show>

            <Show when=show_empty>
                <div id="noItems" class="no-items">
                    <h3>"No items reported yet"</h3>
                    <p>"Lost or found something? Check back soon."</p>
                </div>
            </Show>

            <div id="itemsGrid" class="items-grid">
                {move || store.load_error().get().map(|message| view! {
                    <div class="error-state">
                        <h3>"Oops! Something went wrong"</h3>
                        <p>{message}</p>
                        <button class="btn-primary" on:click=retry>"Try Again"</button>
                    </div>
                })}
                {move || store.items().get().into_iter()
                    .map(|item| view! { <ItemCard item=item /> })
                    .collect_view()}
            </div>
        </section>
    }
}
