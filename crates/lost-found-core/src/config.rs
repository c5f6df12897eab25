//! Board Configuration
//!
//! Everything has a default so an empty object (or no config at all) yields
//! a working board with the email relay disabled.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

const PLACEHOLDER_KEYS: [&str; 3] = [
    "YOUR_EMAILJS_PUBLIC_KEY",
    "YOUR_EMAIL_SERVICE_ID",
    "YOUR_EMAIL_TEMPLATE_ID",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    pub email: EmailConfig,
    pub storage: StorageConfig,
    /// Trailing window for the "recent" counter, in whole days
    pub recent_window_days: i64,
    pub placeholder_image: String,
    /// How long notifications stay on screen
    pub notice_timeout_ms: u32,
    /// `log` level filter name ("info", "debug", ...)
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            email: EmailConfig::default(),
            storage: StorageConfig::default(),
            recent_window_days: 7,
            placeholder_image: "https://via.placeholder.com/400x300?text=No+Image".to_string(),
            notice_timeout_ms: 4000,
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json).map_err(|e| DomainError::InvalidInput(format!("config: {}", e)))
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// EmailJS credentials
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailConfig {
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
    pub configured: bool,
}

impl EmailConfig {
    /// Usable only when switched on and no credential is blank or a placeholder
    pub fn is_configured(&self) -> bool {
        self.configured
            && [&self.public_key, &self.service_id, &self.template_id]
                .iter()
                .all(|v| !v.trim().is_empty() && !PLACEHOLDER_KEYS.contains(&v.as_str()))
    }
}

/// Readiness polling for the storage backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageConfig {
    pub ready_poll_interval_ms: u32,
    pub ready_poll_attempts: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            ready_poll_interval_ms: 100,
            ready_poll_attempts: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = BoardConfig::from_json("{}").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.storage.ready_poll_attempts, 100);
        assert!(!config.email.is_configured());
    }

    #[test]
    fn test_partial_override() {
        let config = BoardConfig::from_json(
            r#"{"storage":{"readyPollAttempts":5},"recentWindowDays":3,"logLevel":"debug"}"#,
        )
        .unwrap();
        assert_eq!(config.storage.ready_poll_attempts, 5);
        assert_eq!(config.storage.ready_poll_interval_ms, 100);
        assert_eq!(config.recent_window_days, 3);
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_placeholder_credentials_are_not_configured() {
        let mut email = EmailConfig {
            public_key: "YOUR_EMAILJS_PUBLIC_KEY".into(),
            service_id: "service_x".into(),
            template_id: "template_y".into(),
            configured: true,
        };
        assert!(!email.is_configured());
        email.public_key = "pk_live".into();
        assert!(email.is_configured());
        email.configured = false;
        assert!(!email.is_configured());
    }

    #[test]
    fn test_malformed_json_is_invalid_input() {
        let err = BoardConfig::from_json("{").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }
}
