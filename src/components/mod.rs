//! UI Components
//!
//! Leptos components for the board. They read the app store and hand user
//! actions to the controller through `AppContext`.

mod contact_modal;
mod fallback_modal;
mod item_card;
mod item_edit_form;
mod item_grid;
mod item_modal;
mod notifications;
mod summary_bar;

pub use contact_modal::ContactModal;
pub use fallback_modal::FallbackModal;
pub use item_card::ItemCard;
pub use item_edit_form::ItemEditForm;
pub use item_grid::ItemGrid;
pub use item_modal::ItemModal;
pub use notifications::Notifications;
pub use summary_bar::SummaryBar;

/// Whether a click landed on the modal backdrop itself rather than its content
pub(crate) fn is_backdrop_click(ev: &web_sys::MouseEvent) -> bool {
    ev.target().is_some() && ev.target() == ev.current_target()
}
