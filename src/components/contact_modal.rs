//! Contact Owner Modal
//!
//! Form addressed to the reporter of the selected item.

use leptos::prelude::*;

use crate::components::is_backdrop_click;
use crate::context::use_app_context;
use crate::models::{ContactForm, ModalKind};
use crate::store::{use_app_store, BoardStateStoreFields};

#[component]
pub fn ContactModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let relay_live = ctx.board().email().is_live();

    let on_backdrop = move |ev: web_sys::MouseEvent| {
        if is_backdrop_click(&ev) {
            ctx.board().handle_backdrop_click(ModalKind::ContactOpen);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm {
            subject: store.contact_subject().get_untracked(),
            message: store.contact_message().get_untracked(),
            sender_email: store.contact_email().get_untracked(),
        };
        ctx.spawn(|board| async move {
            board.handle_contact_submit(form).await;
        });
    };

    view! {
        <Show when=move || store.modal().get() == ModalKind::ContactOpen>
            <div id="contactModal" class="modal" on:click=on_backdrop>
                <div class="modal-content">
                    <span class="close" on:click=move |_| ctx.board().close_contact_modal()>"×"</span>
                    <h2>"Contact Owner"</h2>
                    {move || store.selected().get().map(|item| view! {
                        <p class="contact-about">"About: " {item.title}</p>
                    })}
                    <Show when=move || !relay_live>
                        <p class="contact-hint">
                            "Email delivery is not set up. Sending will offer mail-client options instead."
                        </p>
                    </Show>
                    <form id="contactForm" on:submit=on_submit>
                        <label for="contactSubject">"Subject"</label>
                        <input
                            id="contactSubject"
                            type="text"
                            prop:value=move || store.contact_subject().get()
                            on:input=move |ev| store.contact_subject().set(event_target_value(&ev))
                        />
                        <label for="contactMessage">"Message"</label>
                        <textarea
                            id="contactMessage"
                            rows="6"
                            prop:value=move || store.contact_message().get()
                            on:input=move |ev| store.contact_message().set(event_target_value(&ev))
                        ></textarea>
                        <label for="contactEmail">"Your Email"</label>
                        <input
                            id="contactEmail"
                            type="email"
                            prop:value=move || store.contact_email().get()
                            on:input=move |ev| store.contact_email().set(event_target_value(&ev))
                        />
                        <button type="submit" class="btn-primary" disabled=move || store.sending().get()>
                            {move || if store.sending().get() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
