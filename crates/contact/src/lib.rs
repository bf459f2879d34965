//! Contact form handling.
//!
//! A [`ContactSubmission`] is validated locally, composed into an
//! [`OutgoingEmail`](scrollfolio_core::OutgoingEmail) and handed to a
//! [`Mailer`](scrollfolio_core::Mailer) exactly once. The outcome is always a
//! [`ContactResult`]; relay failures are logged, never propagated.

pub mod compose;
pub mod sender;
pub mod smtp;
pub mod submission;

pub use compose::compose_email;
pub use sender::ContactSender;
pub use smtp::SmtpMailer;
pub use submission::{ContactResult, ContactSubmission};
