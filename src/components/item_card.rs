//! Item Card Component
//!
//! One reported item in the grid. Clicking opens the details modal.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Item;
use crate::store::{use_app_store, BoardStateStoreFields};

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let placeholder = ctx.placeholder_image();
    let image = item.image_or(&placeholder).to_string();
    let date = ctx.board().format_date(&item.date_reported);
    let status_class = format!("item-status {}", item.item_type.as_str());

    let id = item.id.clone();
    let card_class = move || {
        if store.fading().with(|fading| fading.contains(&id)) {
            "item-card fade-out"
        } else {
            "item-card fade-in"
        }
    };

    let selected = item.clone();
    let open = move |_| ctx.board().show_item_modal(selected.clone());

    view! {
        <div class=card_class data-item-id=item.id.to_string() on:click=open>
            <div class="item-image">
                <img src=image alt=item.title.clone() />
                <span class=status_class>{item.item_type.as_str()}</span>
            </div>
            <div class="item-content">
                <h3>{item.title.clone()}</h3>
                <div class="item-meta">
                    <span class="item-location">"📍 " {item.location.clone()}</span>
                    <span class="item-date">"📅 " {date}</span>
                </div>
                <p class="item-description">{item.description.clone()}</p>
                <div class="item-reporter">"👤 " {item.reporter_name.clone()}</div>
            </div>
        </div>
    }
}
