//! LLM-backed responder.
//!
//! Forwards the visitor's latest message, together with a system prompt
//! built from the knowledge base, to a generative-text provider.

use crate::prompt::build_system_prompt;
use scrollfolio_config::ChatConfig;
use scrollfolio_core::message::latest_content;
use scrollfolio_core::{KnowledgeBase, Message, Provider, ProviderError, ProviderRequest};
use std::sync::Arc;
use tracing::{debug, info};

pub struct LlmResponder {
    /// `None` when no credential is configured
    provider: Option<Arc<dyn Provider>>,
    model: String,
    temperature: f32,
    max_tokens: u32,
    system_prompt: String,
    unavailable: String,
}

impl LlmResponder {
    pub fn new(
        provider: Option<Arc<dyn Provider>>,
        config: &ChatConfig,
        kb: &KnowledgeBase,
    ) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            system_prompt: build_system_prompt(kb),
            unavailable: format!(
                "The AI assistant is unavailable right now. You can still reach {} at {}.",
                kb.profile.name, kb.profile.email
            ),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// The canned reply used when no credential is configured.
    pub fn unavailable_message(&self) -> &str {
        &self.unavailable
    }

    /// Answer the latest message of `history`.
    pub async fn respond(&self, history: &[Message]) -> Result<String, ProviderError> {
        let Some(provider) = &self.provider else {
            info!("No generative-text credential configured, returning canned reply");
            return Ok(self.unavailable.clone());
        };

        let latest = latest_content(history);
        let mut request = ProviderRequest::new(&self.model, vec![Message::user(latest)])
            .with_system(&self.system_prompt);
        request.temperature = self.temperature;
        request.max_tokens = Some(self.max_tokens);

        debug!(provider = provider.name(), model = %self.model, "Forwarding chat message");
        let response = provider.complete(request).await?;
        Ok(response.message.content)
    }
}
