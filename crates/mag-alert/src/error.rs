//! Alerting error types.

use thiserror::Error;

/// Errors from low-stock alert dispatch.
#[derive(Debug, Error)]
pub enum AlertError {
    /// A required mail setting (sender, credential, recipient, host) is
    /// absent. Raised before any transport is constructed.
    #[error("Alert configuration error: {0}")]
    Configuration(String),

    /// Sender or recipient address does not parse as a mailbox.
    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message itself could not be assembled.
    #[error("Failed to build alert message: {0}")]
    Message(#[from] lettre::error::Error),

    /// Transport-level failure (connection, auth, timeout) from the single
    /// delivery attempt.
    #[error("Alert delivery failed: {0}")]
    Delivery(#[from] lettre::transport::smtp::Error),
}
