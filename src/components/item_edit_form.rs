//! Item Edit Form
//!
//! Inline form in the details modal. Only fields that actually changed are
//! sent to the store.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{Item, ItemPatch};

/// `Some(new)` when the trimmed value differs from `old`
fn changed(new: String, old: &str) -> Option<String> {
    let new = new.trim().to_string();
    (new != old).then_some(new)
}

#[component]
pub fn ItemEditForm(item: Item, set_editing: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(item.title.clone());
    let (location, set_location) = signal(item.location.clone());
    let (description, set_description) = signal(item.description.clone());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let patch = ItemPatch {
            title: changed(title.get_untracked(), &item.title),
            location: changed(location.get_untracked(), &item.location),
            description: changed(description.get_untracked(), &item.description),
            ..Default::default()
        };
        set_editing.set(false);
        ctx.spawn(|board| async move {
            board.update_item(patch).await;
        });
    };

    view! {
        <form class="item-edit-form" on:submit=on_submit>
            <label>
                "Title"
                <input
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Location"
                <input
                    type="text"
                    prop:value=move || location.get()
                    on:input=move |ev| set_location.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Description"
                <textarea
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button type="submit" class="btn-primary">"Save Changes"</button>
        </form>
    }
}
