//! # mag-alert
//!
//! Low-stock alert formatting and SMTP dispatch.
//!
//! Builds a plain-text bulletin from the low-stock snapshot and submits it
//! over authenticated SMTP+STARTTLS (port 587 by default). Exactly one
//! attempt per invocation; the caller decides whether to re-trigger.

pub mod error;

pub use error::AlertError;

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use mag_config::MailConfig;
use mag_core::entities::Product;

/// Subject line of the low-stock bulletin.
pub const ALERT_SUBJECT: &str = "⚠️ Alert Magazynowy";

/// Render the alert body: one bullet per item, `- <name>: <quantity> szt.`
#[must_use]
pub fn format_alert_body(items: &[Product]) -> String {
    items
        .iter()
        .map(|item| format!("- {}: {} szt.", item.name, item.quantity))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-shot mailer for the low-stock bulletin.
///
/// Construction validates the mail configuration and parses the addresses;
/// nothing is dialed until [`Self::send_low_stock_alert`]. The SMTP client
/// itself connects lazily on send.
pub struct LowStockMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    recipient: Mailbox,
}

impl LowStockMailer {
    /// Build a mailer from the mail configuration.
    ///
    /// # Errors
    ///
    /// `AlertError::Configuration` when the host, sender, credential, or
    /// recipient is absent (checked before any transport exists, so no
    /// network is touched); `AlertError::Address` when an address does not
    /// parse; `AlertError::Delivery` when the relay cannot be constructed.
    pub fn from_config(config: &MailConfig) -> Result<Self, AlertError> {
        let missing: Vec<&str> = [
            ("mail.smtp_host", config.smtp_host.is_empty()),
            ("mail.sender", config.sender.is_empty()),
            ("mail.password", config.password.is_empty()),
            ("mail.recipient", config.recipient.is_empty()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();
        if !missing.is_empty() {
            return Err(AlertError::Configuration(format!(
                "missing required settings: {}",
                missing.join(", ")
            )));
        }

        let sender: Mailbox = config.sender.parse()?;
        let recipient: Mailbox = config.recipient.parse()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.sender.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            sender,
            recipient,
        })
    }

    /// Submit the low-stock bulletin. Single attempt, no retry.
    ///
    /// # Errors
    ///
    /// `AlertError::Delivery` wrapping the transport failure (connection,
    /// auth, timeout); `AlertError::Message` if assembly fails.
    pub async fn send_low_stock_alert(&self, items: &[Product]) -> Result<(), AlertError> {
        let message = Message::builder()
            .from(self.sender.clone())
            .to(self.recipient.clone())
            .subject(ALERT_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(format_alert_body(items))?;

        self.transport.send(message).await?;
        tracing::info!(items = items.len(), "low-stock alert dispatched");
        Ok(())
    }
}
