//! Item Details Modal
//!
//! Full details of the selected item, with contact, edit and delete actions.

use leptos::prelude::*;

use crate::components::{is_backdrop_click, ItemEditForm};
use crate::context::use_app_context;
use crate::models::ModalKind;
use crate::store::{use_app_store, BoardStateStoreFields};

#[component]
pub fn ItemModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (editing, set_editing) = signal(false);
    let placeholder = ctx.placeholder_image();

    let on_backdrop = move |ev: web_sys::MouseEvent| {
        if is_backdrop_click(&ev) {
            set_editing.set(false);
            ctx.board().handle_backdrop_click(ModalKind::ItemOpen);
        }
    };
    let close = move |_| {
        set_editing.set(false);
        ctx.board().close_modal();
    };
    let contact = move |_| {
        set_editing.set(false);
        ctx.board().contact_owner();
    };
    let delete = move |_| {
        ctx.spawn(|board| async move {
            board.delete_item().await;
        });
    };

    view! {
        <Show when=move || store.modal().get() == ModalKind::ItemOpen>
            <div id="itemModal" class="modal" on:click=on_backdrop>
                <div class="modal-content">
                    <span class="close" on:click=close>"×"</span>
                    <h2 id="modalTitle">"Item Details"</h2>
                    {
                        let placeholder = placeholder.clone();
                        move || store.selected().get().map(|item| {
                            let date = ctx.board().format_date(&item.date_reported);
                            let edit_item = item.clone();
                            view! {
                                <div class="modal-body">
                                    <img id="modalImage" src=item.image_or(&placeholder).to_string() alt=item.title.clone() />
                                    <div class="modal-info">
                                        <span id="modalStatus" class=format!("item-status {}", item.item_type.as_str())>
                                            {item.item_type.as_str()}
                                        </span>
                                        <span id="modalDate">{date}</span>
                                        <h3 id="modalItemName">{item.title.clone()}</h3>
                                        <p><strong>"Category: "</strong><span id="modalCategory">{item.category_label()}</span></p>
                                        <p><strong>"Location: "</strong><span id="modalLocation">{item.location.clone()}</span></p>
                                        <p id="modalDescription">{item.description.clone()}</p>
                                        <div class="modal-reporter">
                                            <p><strong>"Reported by: "</strong><span id="modalReporter">{item.reporter_name.clone()}</span></p>
                                            <p><strong>"Email: "</strong><span id="modalEmail">{item.reporter_email.clone()}</span></p>
                                            <p><strong>"Phone: "</strong><span id="modalPhone">{item.phone_label().to_string()}</span></p>
                                        </div>
                                    </div>
                                </div>
                                <Show when=move || editing.get()>
                                    <ItemEditForm item=edit_item.clone() set_editing=set_editing />
                                </Show>
                            }
                        })
                    }
                    <div class="modal-actions">
                        <button class="btn-primary" on:click=contact>"Contact Owner"</button>
                        <button class="btn-secondary" on:click=move |_| set_editing.update(|e| *e = !*e)>
                            {move || if editing.get() { "Cancel Edit" } else { "Edit" }}
                        </button>
                        <button class="btn-delete" disabled=move || store.deleting().get() on:click=delete>
                            {move || if store.deleting().get() { "Deleting..." } else { "🗑️ Delete Item" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
