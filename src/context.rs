//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use lost_found_core::gateway::RelayEmailGateway;
use lost_found_core::{BoardConfig, BoardController};

use crate::bindings::{EmailJsRelay, WindowStorage};
use crate::board_view::StoreView;

/// The controller as wired up in the browser
pub type WebBoard = BoardController<WindowStorage, RelayEmailGateway<EmailJsRelay>, StoreView>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    board: StoredValue<Rc<WebBoard>, LocalStorage>,
    config: StoredValue<BoardConfig>,
}

impl AppContext {
    pub fn new(board: WebBoard, config: BoardConfig) -> Self {
        Self {
            board: StoredValue::new_local(Rc::new(board)),
            config: StoredValue::new(config),
        }
    }

    pub fn board(&self) -> Rc<WebBoard> {
        self.board.get_value()
    }

    pub fn placeholder_image(&self) -> String {
        self.config.with_value(|config| config.placeholder_image.clone())
    }

    /// Run an async board handler on the event loop
    pub fn spawn<F, Fut>(&self, handler: F)
    where
        F: FnOnce(Rc<WebBoard>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(handler(self.board()));
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
