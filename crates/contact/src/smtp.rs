//! SMTP mail relay built on `lettre`.
//!
//! Defaults target Gmail (`smtp.gmail.com:465`, implicit TLS) with the
//! account's app password, which is what `GMAIL_USER` / `GMAIL_PASS` hold.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use scrollfolio_config::MailConfig;
use scrollfolio_core::{MailError, Mailer, OutgoingEmail};
use tracing::{debug, warn};

pub struct SmtpMailer {
    host: String,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build a relay from configuration. Fails when credentials are missing.
    pub fn from_config(config: &MailConfig) -> Result<Self, MailError> {
        let (Some(user), Some(pass)) = (config.username.as_deref(), config.password.as_deref())
        else {
            return Err(MailError::NotConfigured(
                "GMAIL_USER and GMAIL_PASS must both be set".into(),
            ));
        };
        if !config.has_credentials() {
            return Err(MailError::NotConfigured("relay credentials are empty".into()));
        }

        let builder = if config.implicit_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
        };
        let builder = builder.map_err(|e| MailError::Transport(e.to_string()))?;

        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(user.trim().to_string(), pass.to_string()))
            .build();

        Ok(Self {
            host: config.smtp_host.clone(),
            transport,
        })
    }

    /// Convert our email into a lettre message.
    pub fn build_message(email: &OutgoingEmail) -> Result<lettre::Message, MailError> {
        let from = Mailbox::new(
            (!email.from_name.is_empty()).then(|| email.from_name.clone()),
            parse_address(&email.from_address)?,
        );
        let to = Mailbox::new(None, parse_address(&email.to)?);

        let mut builder = lettre::Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.clone());

        // The visitor's address is free text; an unusable one only loses Reply-To.
        if let Some(reply_to) = &email.reply_to {
            match parse_address(reply_to) {
                Ok(address) => builder = builder.reply_to(Mailbox::new(None, address)),
                Err(e) => warn!(error = %e, "Dropping unparseable Reply-To"),
            }
        }

        let message = match &email.html {
            Some(html) => builder.multipart(MultiPart::alternative_plain_html(
                email.text.clone(),
                html.clone(),
            )),
            None => builder
                .header(ContentType::TEXT_PLAIN)
                .body(email.text.clone()),
        };

        message.map_err(|e| MailError::Build(e.to_string()))
    }
}

fn parse_address(raw: &str) -> Result<Address, MailError> {
    raw.trim()
        .parse::<Address>()
        .map_err(|e| MailError::InvalidAddress {
            address: raw.to_string(),
            reason: e.to_string(),
        })
}

fn transport_error(e: lettre::transport::smtp::Error) -> MailError {
    let auth_rejected = e.status().is_some_and(|code| code.to_string() == "535");
    if auth_rejected {
        MailError::AuthenticationFailed(e.to_string())
    } else {
        MailError::Transport(e.to_string())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    fn name(&self) -> &str {
        &self.host
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let message = Self::build_message(email)?;
        let response = self.transport.send(message).await.map_err(transport_error)?;
        debug!(host = %self.host, code = %response.code(), "Relay accepted message");
        Ok(())
    }

    async fn verify(&self) -> Result<bool, MailError> {
        self.transport
            .test_connection()
            .await
            .map_err(transport_error)
    }
}
