//! SMTP alerting configuration.

use serde::{Deserialize, Serialize};

/// Default SMTP submission port (STARTTLS).
const fn default_smtp_port() -> u16 {
    587
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// SMTP relay hostname (e.g., `smtp.gmail.com`).
    #[serde(default)]
    pub smtp_host: String,

    /// SMTP submission port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// Sender address, also used as the SMTP username.
    #[serde(default)]
    pub sender: String,

    /// Sender credential (app password).
    #[serde(default)]
    pub password: String,

    /// Alert recipient address.
    #[serde(default)]
    pub recipient: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::new(),
            smtp_port: default_smtp_port(),
            sender: String::new(),
            password: String::new(),
            recipient: String::new(),
        }
    }
}

impl MailConfig {
    /// Check if the mail config has every field alert dispatch needs.
    ///
    /// Checked by the alerting service immediately before dispatch, not at
    /// startup, so read-only commands run without SMTP secrets.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.smtp_host.is_empty()
            && !self.sender.is_empty()
            && !self.password.is_empty()
            && !self.recipient.is_empty()
    }
}
