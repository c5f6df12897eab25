//! Summary Bar Component

use leptos::prelude::*;

use crate::store::{use_app_store, BoardStateStoreFields};

/// Totals above the grid
#[component]
pub fn SummaryBar() -> impl IntoView {
    let store = use_app_store();
    let stats = move || store.stats().get();

    view! {
        <section class="summary-section">
            <div class="stat-card">
                <span class="stat-number stat-total">{move || stats().total}</span>
                <span class="stat-label">"Total Items"</span>
            </div>
            <div class="stat-card">
                <span class="stat-number stat-lost">{move || stats().lost}</span>
                <span class="stat-label">"Lost"</span>
            </div>
            <div class="stat-card">
                <span class="stat-number stat-found">{move || stats().found}</span>
                <span class="stat-label">"Found"</span>
            </div>
            <div class="stat-card">
                <span class="stat-number stat-recent">{move || stats().recent}</span>
                <span class="stat-label">"This Week"</span>
            </div>
        </section>
        <p class="items-count-line">
            <span id="itemsCount">{move || store.shown().get()}</span>
            " items"
        </p>
    }
}
