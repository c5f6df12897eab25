//! Notification toasts

use leptos::prelude::*;

use crate::models::Toast;
use crate::store::{use_app_store, BoardStateStoreFields};

#[component]
pub fn Notifications() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notifications">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let class = toast.class();
                    view! { <div class=class>{toast.notice.text}</div> }
                }
            />
        </div>
    }
}
