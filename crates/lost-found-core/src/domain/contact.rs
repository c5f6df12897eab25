//! Contact Messages
//!
//! What a visitor types into the contact form and what gets handed to the
//! email gateway. Nothing here is persisted.

use serde::{Deserialize, Serialize};

use super::item::Item;

/// Raw contact form fields as entered by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub subject: String,
    pub message: String,
    pub sender_email: String,
}

impl ContactForm {
    /// All three fields must contain something other than whitespace
    pub fn is_complete(&self) -> bool {
        [&self.subject, &self.message, &self.sender_email]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Pre-filled subject and greeting shown when the contact modal opens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn for_item(item: &Item) -> Self {
        Self {
            subject: format!("Regarding {} Item: {}", item.item_type.label(), item.title),
            message: format!("Hi {},\n\nI saw your listing about the {}. ", item.reporter_name, item.title),
        }
    }
}

/// One send attempt, addressed to the reporter of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub recipient_email: String,
    pub sender_email: String,
    pub sender_name: Option<String>,
    pub subject: String,
    pub message: String,
    pub item_title: String,
    /// "Lost" or "Found"
    pub item_type: String,
}

impl ContactMessage {
    pub fn for_item(item: &Item, form: &ContactForm) -> Self {
        let sender_email = form.sender_email.trim().to_string();
        Self {
            recipient_email: item.reporter_email.clone(),
            sender_name: Some(sender_name_from(&sender_email)),
            sender_email,
            subject: form.subject.clone(),
            message: form.message.clone(),
            item_title: item.title.clone(),
            item_type: item.item_type.label().to_string(),
        }
    }

    /// Sender name, derived from the sender address when none was given
    pub fn display_sender_name(&self) -> String {
        match self.sender_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => sender_name_from(&self.sender_email),
        }
    }
}

/// Local part of an email address ("ana@example.com" -> "ana")
fn sender_name_from(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}
