//! Chat responders for the portfolio assistant widget.
//!
//! Two interchangeable strategies answer the same contract: the caller
//! supplies the full conversation history, the responder returns one
//! assistant message, and nothing is remembered between calls.
//!
//! - [`KeywordResponder`]: ordered keyword groups over the knowledge base.
//! - [`LlmResponder`]: system prompt + latest message to a generative-text provider.

pub mod keyword;
pub mod llm;
pub mod prompt;

pub use keyword::{KeywordResponder, Topic};
pub use llm::LlmResponder;
pub use prompt::build_system_prompt;

use scrollfolio_config::{ChatConfig, ChatStrategy};
use scrollfolio_core::message::latest_content;
use scrollfolio_core::{KnowledgeBase, Message, Provider, ProviderError};
use std::sync::Arc;
use tracing::info;

/// Errors surfaced by a chat strategy.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// The strategy selected at startup.
pub enum ChatResponder {
    Keyword(KeywordResponder),
    Llm(LlmResponder),
}

impl ChatResponder {
    /// Build the responder named by `config.strategy`.
    ///
    /// `provider` is only consulted for the LLM strategy.
    pub fn from_config(
        config: &ChatConfig,
        kb: Arc<KnowledgeBase>,
        provider: Option<Arc<dyn Provider>>,
    ) -> Self {
        let responder = match config.strategy {
            ChatStrategy::Keyword => Self::Keyword(KeywordResponder::new(kb)),
            ChatStrategy::Llm => Self::Llm(LlmResponder::new(provider, config, &kb)),
        };
        info!(strategy = responder.strategy_name(), "Chat responder ready");
        responder
    }

    pub fn strategy(&self) -> ChatStrategy {
        match self {
            Self::Keyword(_) => ChatStrategy::Keyword,
            Self::Llm(_) => ChatStrategy::Llm,
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        match self {
            Self::Keyword(_) => "keyword",
            Self::Llm(_) => "llm",
        }
    }

    /// Produce the assistant's reply to the last message in `history`.
    pub async fn reply(&self, history: &[Message]) -> Result<Message, ChatError> {
        let content = match self {
            Self::Keyword(r) => r.respond(latest_content(history)),
            Self::Llm(r) => r.respond(history).await?,
        };
        Ok(Message::assistant(content))
    }
}
