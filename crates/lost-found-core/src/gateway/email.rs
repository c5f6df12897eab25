//! Contact email delivery
//!
//! `RelayEmailGateway` owns the configured/unconfigured decision: with a live
//! relay it sends the template, otherwise it answers with mail-client
//! fallback options.

use async_trait::async_trait;
use serde::Serialize;

use super::{EmailGateway, SendReport};
use crate::config::EmailConfig;
use crate::domain::{ContactMessage, DomainResult};
use crate::mailto::MailtoFallback;

const DEFAULT_FROM_NAME: &str = "Lost & Found User";

/// Variables substituted into the relay's email template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub to_email: String,
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub item_title: String,
    pub item_type: String,
}

impl From<&ContactMessage> for TemplateParams {
    fn from(msg: &ContactMessage) -> Self {
        Self {
            to_email: msg.recipient_email.clone(),
            from_name: Some(msg.display_sender_name())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_FROM_NAME.to_string()),
            from_email: msg.sender_email.clone(),
            subject: msg.subject.clone(),
            message: msg.message.clone(),
            item_title: msg.item_title.clone(),
            item_type: msg.item_type.clone(),
        }
    }
}

/// A hosted transactional email service
#[async_trait(?Send)]
pub trait EmailRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), String>;
}

pub struct RelayEmailGateway<R> {
    relay: Option<R>,
}

impl<R: EmailRelay> RelayEmailGateway<R> {
    /// Connect the relay when `config` is usable. A failed connect degrades
    /// to the fallback instead of failing the board.
    pub fn connect<F>(config: &EmailConfig, connect: F) -> Self
    where
        F: FnOnce(&EmailConfig) -> Result<R, String>,
    {
        if !config.is_configured() {
            log::warn!("Email relay not configured; contact form will offer mail-client options");
            log::info!("{}", SETUP_INSTRUCTIONS);
            return Self { relay: None };
        }
        match connect(config) {
            Ok(relay) => {
                log::info!("Email relay initialized");
                Self { relay: Some(relay) }
            }
            Err(e) => {
                log::error!("Failed to initialize email relay: {}", e);
                log::info!("{}", SETUP_INSTRUCTIONS);
                Self { relay: None }
            }
        }
    }

    /// A gateway that always answers with fallback options
    pub fn unconfigured() -> Self {
        Self { relay: None }
    }

    /// Whether sends go out through the relay rather than the fallback
    pub fn is_live(&self) -> bool {
        self.relay.is_some()
    }
}

#[async_trait(?Send)]
impl<R: EmailRelay> EmailGateway for RelayEmailGateway<R> {
    async fn send_contact_email(&self, message: &ContactMessage) -> DomainResult<SendReport> {
        let Some(relay) = &self.relay else {
            log::info!("Email relay not configured, offering fallback to {}", message.recipient_email);
            return Ok(SendReport::fallback(MailtoFallback::for_message(message)));
        };

        log::debug!("Sending contact email about {:?}", message.item_title);
        match relay.send(&TemplateParams::from(message)).await {
            Ok(()) => {
                log::info!("Contact email sent to {}", message.recipient_email);
                Ok(SendReport::sent("Email sent successfully!"))
            }
            Err(e) => {
                log::error!("Failed to send contact email: {}", e);
                Ok(SendReport::failed("Failed to send email. Please try again or contact directly."))
            }
        }
    }
}

const SETUP_INSTRUCTIONS: &str = "\
EMAIL SETUP: create an EmailJS account, connect an email service and add a
template using {{to_email}}, {{from_name}}, {{from_email}}, {{subject}},
{{message}}, {{item_title}} and {{item_type}}. Then set email.publicKey,
email.serviceId, email.templateId and email.configured = true in
window.LOST_FOUND_CONFIG. Until then the contact form offers mail-client
options instead of sending.";
