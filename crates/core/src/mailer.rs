//! Mailer trait: the abstraction over the outbound mail relay.

use crate::error::MailError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A fully composed email, ready for a relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    /// Display name on the From header (the visitor's name)
    pub from_name: String,

    /// Authenticated sender address (the relay account)
    pub from_address: String,

    /// Recipient address (the site owner)
    pub to: String,

    /// Where replies should go (the visitor's address)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,

    pub subject: String,

    /// Plain-text body
    pub text: String,

    /// Optional HTML alternative
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

/// Sends composed emails through an external relay.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// A human-readable name for this relay (e.g., "smtp.gmail.com").
    fn name(&self) -> &str;

    /// Dispatch one message. Attempted exactly once.
    async fn send(&self, email: &OutgoingEmail) -> std::result::Result<(), MailError>;

    /// Check that the relay accepts our credentials without sending anything.
    async fn verify(&self) -> std::result::Result<bool, MailError> {
        Ok(true)
    }
}
