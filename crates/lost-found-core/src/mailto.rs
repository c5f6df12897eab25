//! Mail-client fallback used when the email relay is not configured.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::domain::ContactMessage;

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Options presented to the visitor instead of sending: a `mailto:` link,
/// the address to copy, and a summary of what they wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailtoFallback {
    pub url: String,
    pub recipient: String,
    pub subject: String,
    pub sender_email: String,
    pub message: String,
}

impl MailtoFallback {
    pub fn for_message(msg: &ContactMessage) -> Self {
        let body = format!("From: {}\n\n{}", msg.sender_email, msg.message);
        let url = format!(
            "mailto:{}?subject={}&body={}",
            msg.recipient_email,
            encode_component(&msg.subject),
            encode_component(&body),
        );
        Self {
            url,
            recipient: msg.recipient_email.clone(),
            subject: msg.subject.clone(),
            sender_email: msg.sender_email.clone(),
            message: msg.message.clone(),
        }
    }
}

pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}
