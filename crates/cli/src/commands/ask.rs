//! `scrollfolio ask` — Ask the chat assistant a single question.

use scrollfolio_chat::ChatResponder;
use scrollfolio_config::ChatStrategy;
use scrollfolio_core::{KnowledgeBase, Message};
use std::path::Path;
use std::sync::Arc;

pub async fn run(
    config_path: Option<&Path>,
    message: &str,
    strategy: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = super::load_config(config_path)?;
    if let Some(strategy) = strategy {
        config.chat.strategy = strategy.parse::<ChatStrategy>()?;
    }

    let kb = Arc::new(KnowledgeBase::load_or_builtin(config.profile.path.as_deref())?);
    let provider = scrollfolio_providers::build_from_config(&config.chat);
    let responder = ChatResponder::from_config(&config.chat, kb, provider);

    let reply = responder.reply(&[Message::user(message)]).await?;
    println!("{}", reply.content);

    Ok(())
}
