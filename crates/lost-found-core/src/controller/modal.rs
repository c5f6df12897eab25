//! Modal state
//!
//! At most one modal is visible. Leaving to `Closed` always drops the
//! selection; the contact modal keeps it so a submit knows who to write to.

use crate::domain::Item;
use crate::view::ModalKind;

#[derive(Debug, Clone, Default)]
pub struct ModalState {
    kind: ModalKind,
    selected: Option<Item>,
}

impl ModalState {
    pub fn kind(&self) -> ModalKind {
        self.kind
    }

    pub fn selected(&self) -> Option<&Item> {
        self.selected.as_ref()
    }

    /// Open the item modal, replacing any previous selection
    pub fn select(&mut self, item: Item) {
        self.kind = ModalKind::ItemOpen;
        self.selected = Some(item);
    }

    /// ItemOpen -> ContactOpen. Returns false (and changes nothing) otherwise.
    pub fn open_contact(&mut self) -> bool {
        if self.kind != ModalKind::ItemOpen || self.selected.is_none() {
            return false;
        }
        self.kind = ModalKind::ContactOpen;
        true
    }

    /// Close whatever is open
    pub fn close(&mut self) {
        self.kind = ModalKind::Closed;
        self.selected = None;
    }

    /// Close the contact modal only. Returns whether it was open.
    pub fn close_contact(&mut self) -> bool {
        if self.kind != ModalKind::ContactOpen {
            return false;
        }
        self.close();
        true
    }
}
