//! # Scrollfolio Core
//!
//! Domain types, traits, and error definitions for the Scrollfolio portfolio
//! service. This crate has **no framework dependencies**: it defines the
//! domain model that the other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every external collaborator (generative-text service, mail relay) is a
//! trait here. Implementations live in their respective crates, so the chat
//! and contact components can be tested with stub implementations.

pub mod error;
pub mod mailer;
pub mod message;
pub mod profile;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use error::{Error, MailError, ProviderError, Result, SequenceError};
pub use mailer::{Mailer, OutgoingEmail};
pub use message::{Message, Role};
pub use profile::{KnowledgeBase, OwnerProfile, ProfileDetails, SocialLink};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
