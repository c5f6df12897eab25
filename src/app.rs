//! Lost & Found Frontend App
//!
//! Wires the board controller to the browser and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use lost_found_core::gateway::RelayEmailGateway;
use lost_found_core::{BoardConfig, BoardController};

use crate::bindings::{on_escape, on_items_updated, EmailJsRelay, WindowStorage};
use crate::board_view::StoreView;
use crate::components::{ContactModal, FallbackModal, ItemGrid, ItemModal, Notifications, SummaryBar};
use crate::context::AppContext;
use crate::store::BoardState;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let store = Store::new(BoardState::default());
    provide_context(store);

    let view = StoreView::new(store, config.notice_timeout_ms);
    let storage = WindowStorage::new(&config.storage);
    let email = RelayEmailGateway::connect(&config.email, EmailJsRelay::connect);
    let board = BoardController::new(storage, email, view).with_config(&config);

    let ctx = AppContext::new(board, config);
    provide_context(ctx);

    // Real-time changes from the store client
    on_items_updated(move || {
        log::info!("Items changed remotely, reloading");
        ctx.spawn(|board| async move {
            board.refresh().await;
        });
    });
    on_escape(move || ctx.board().handle_escape());

    ctx.spawn(|board| async move {
        board.load_items().await;
    });

    view! {
        <div class="container">
            <header class="board-header">
                <h1>"Lost & Found"</h1>
                <SummaryBar />
            </header>
            <main>
                <ItemGrid />
            </main>
            <ItemModal />
            <ContactModal />
            <FallbackModal />
            <Notifications />
        </div>
    }
}
