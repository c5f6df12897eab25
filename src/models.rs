//! Frontend Models
//!
//! Board types come from the core crate; this adds what only the page needs.

pub use lost_found_core::{
    BoardStats, ContactForm, Item, ItemId, ItemPatch, ItemType, MailtoFallback, ModalKind, Notice,
    NoticeLevel,
};

/// A notification on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

impl Toast {
    pub fn class(&self) -> &'static str {
        match self.notice.level {
            NoticeLevel::Success => "success-notification",
            NoticeLevel::Error => "error-notification",
            NoticeLevel::Critical => "error-notification critical",
        }
    }
}
