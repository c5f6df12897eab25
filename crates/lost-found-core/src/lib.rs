//! Lost & Found board core
//!
//! Layered the same way as the board itself:
//! - domain: items, contact messages, errors
//! - gateway: storage and email contracts, plus in-memory/relay implementations
//! - view: what the controller asks of the page
//! - controller: the page lifecycle
//!
//! Nothing in here touches the browser; the UI crate supplies the gateways
//! and the view.

pub mod config;
pub mod controller;
pub mod domain;
pub mod gateway;
pub mod mailto;
pub mod stats;
pub mod view;

pub use config::{BoardConfig, EmailConfig, StorageConfig};
pub use controller::BoardController;
pub use domain::{
    ContactDraft, ContactForm, ContactMessage, DomainError, DomainResult, Item, ItemId, ItemPatch,
    ItemType,
};
pub use gateway::{EmailGateway, SendReport, StorageGateway};
pub use mailto::MailtoFallback;
pub use stats::BoardStats;
pub use view::{BoardView, ModalKind, Notice, NoticeLevel};
