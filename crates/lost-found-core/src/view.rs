//! View binding
//!
//! What the controller needs from the page. The browser crate implements this
//! with reactive signals; tests implement it with a recorder.

use crate::domain::{ContactDraft, Item, ItemId};
use crate::mailto::MailtoFallback;
use crate::stats::BoardStats;

/// Which modal is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalKind {
    #[default]
    Closed,
    ItemOpen,
    ContactOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    /// The backend and the board disagree about what exists
    Critical,
}

/// A transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, text: text.into() }
    }

    pub fn critical(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Critical, text: text.into() }
    }
}

pub trait BoardView {
    /// Loading indicator on/off. Turning it on also clears the grid.
    fn set_loading(&self, loading: bool);

    /// Replace the rendered list wholesale; an empty slice shows "no items"
    fn set_item_list(&self, items: &[Item]);

    /// Inline error panel with a retry action, replacing the grid
    fn show_load_error(&self, message: &str);

    /// Fade a single card out of the rendered list
    fn remove_item(&self, id: &ItemId);

    /// `shown` is the number of cards currently listed
    fn set_stats(&self, stats: &BoardStats, shown: usize);

    /// Show one modal (or none). `item` is the current selection.
    fn show_modal(&self, kind: ModalKind, item: Option<&Item>);

    fn set_contact_draft(&self, draft: &ContactDraft);

    fn reset_contact_form(&self);

    /// Submit control disabled while a send is in flight
    fn set_sending(&self, busy: bool);

    /// Delete control disabled while a delete is in flight
    fn set_deleting(&self, busy: bool);

    fn notify(&self, notice: Notice);

    /// Blocking yes/no prompt
    fn confirm(&self, prompt: &str) -> bool;

    /// Offer mail-client options when the relay is not configured
    fn present_mail_fallback(&self, fallback: &MailtoFallback);

    /// Take the mail-client options off screen, if shown
    fn dismiss_mail_fallback(&self);
}
