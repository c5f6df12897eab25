//! Domain Layer
//!
//! Items reported on the board and the messages sent about them.
//! This layer has no knowledge of the browser.

mod error;
mod item;
mod contact;

pub use error::{DomainError, DomainResult};
pub use item::{Item, ItemId, ItemPatch, ItemType};
pub use contact::{ContactDraft, ContactForm, ContactMessage};
