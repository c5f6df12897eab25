//! Mail-client fallback modal
//!
//! Shown instead of sending when the email relay is not configured.

use leptos::prelude::*;
use leptos::task::spawn_local;

use lost_found_core::BoardView;

use crate::bindings::copy_text;
use crate::context::use_app_context;
use crate::models::Notice;
use crate::store::{use_app_store, BoardStateStoreFields};

#[component]
pub fn FallbackModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let close = move |_| ctx.board().view().dismiss_mail_fallback();

    view! {
        {move || store.fallback().get().map(|fallback| {
            let recipient = fallback.recipient.clone();
            let copy = move |_| {
                let recipient = recipient.clone();
                spawn_local(async move {
                    let notice = match copy_text(&recipient).await {
                        Ok(()) => Notice::success("Email copied!"),
                        Err(e) => {
                            log::warn!("Clipboard write failed: {}", e);
                            Notice::error("Could not copy the address")
                        }
                    };
                    ctx.board().view().notify(notice);
                });
            };
            view! {
                <div class="modal fallback-modal">
                    <div class="modal-content">
                        <h3>"📧 Contact Owner"</h3>
                        <p>"Email functionality is not yet configured. You can:"</p>
                        <div class="fallback-actions">
                            <a class="btn-primary" href=fallback.url.clone()>"📬 Open Email Client"</a>
                            <button class="btn-secondary" on:click=copy>
                                "📋 Copy Email: " {fallback.recipient.clone()}
                            </button>
                            <button class="btn-cancel" on:click=close>"✕ Close"</button>
                        </div>
                        <div class="fallback-summary">
                            <p><strong>"Subject: "</strong>{fallback.subject.clone()}</p>
                            <p><strong>"Your Email: "</strong>{fallback.sender_email.clone()}</p>
                            <p><strong>"Message:"</strong></p>
                            <div class="fallback-message">{fallback.message.clone()}</div>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
