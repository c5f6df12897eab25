//! Lost & Found Frontend Entry Point

mod app;
mod bindings;
mod board_view;
mod components;
mod context;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = bindings::load_board_config();
    if let Err(e) = board_logger::init(config.log_level()) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }
    bindings::expose_recent_logs();
    log::info!("Lost & Found board starting");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
