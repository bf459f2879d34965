//! The contact sender: validate, compose, dispatch once, report.
//!
//! Nothing escapes [`ContactSender::send`]: validation failures, missing
//! relay configuration and relay errors all become a [`ContactResult`].

use crate::compose::compose_email;
use crate::smtp::SmtpMailer;
use crate::submission::{ContactResult, ContactSubmission};
use scrollfolio_config::MailConfig;
use scrollfolio_core::Mailer;
use std::sync::Arc;
use tracing::{error, info, warn};

pub const MISSING_FIELDS: &str = "Missing fields";
pub const SEND_FAILED: &str = "Failed to send email";
pub const NOT_CONFIGURED: &str = "Email is not configured";

/// Relay plus the addresses it sends as and delivers to.
struct Relay {
    mailer: Arc<dyn Mailer>,
    account: String,
    owner: String,
}

pub struct ContactSender {
    relay: Option<Relay>,
}

impl ContactSender {
    /// Sender using `mailer`, authenticated as `account`, delivering to `owner`.
    pub fn new(mailer: Arc<dyn Mailer>, account: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            relay: Some(Relay {
                mailer,
                account: account.into(),
                owner: owner.into(),
            }),
        }
    }

    /// A sender that reports every valid submission as not configured.
    pub fn unconfigured() -> Self {
        Self { relay: None }
    }

    /// Build the SMTP-backed sender, degrading to [`ContactSender::unconfigured`].
    pub fn from_config(config: &MailConfig) -> Self {
        let (Some(account), Some(owner)) = (config.username.clone(), config.owner()) else {
            warn!("GMAIL_USER / GMAIL_PASS not set, contact form cannot send email");
            return Self::unconfigured();
        };
        let owner = owner.to_string();

        match SmtpMailer::from_config(config) {
            Ok(mailer) => Self::new(Arc::new(mailer), account, owner),
            Err(e) => {
                warn!(error = %e, "Contact form cannot send email");
                Self::unconfigured()
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.relay.is_some()
    }

    /// Validate and deliver one submission. Attempted exactly once.
    pub async fn send(&self, submission: &ContactSubmission) -> ContactResult {
        if !submission.is_complete() {
            info!(missing = ?submission.missing_fields(), "Rejected incomplete contact submission");
            return ContactResult::failed(MISSING_FIELDS);
        }

        let Some(relay) = &self.relay else {
            warn!("Contact submission dropped: mail relay not configured");
            return ContactResult::failed(NOT_CONFIGURED);
        };

        let email = compose_email(submission, &relay.account, &relay.owner);
        match relay.mailer.send(&email).await {
            Ok(()) => {
                info!(relay = relay.mailer.name(), "Contact email sent");
                ContactResult::ok()
            }
            Err(e) => {
                error!(relay = relay.mailer.name(), error = %e, "Error sending email");
                ContactResult::failed(SEND_FAILED)
            }
        }
    }
}
