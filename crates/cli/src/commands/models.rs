//! `scrollfolio models` — List generative models available to the API key.

use scrollfolio_core::Provider;
use scrollfolio_providers::GeminiProvider;
use std::path::Path;

pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path)?;
    let Some(api_key) = config.chat.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
        return Err("GEMINI_API_KEY is not set (environment or .env.local)".into());
    };

    let provider = GeminiProvider::new(&config.chat.api_url, api_key);
    let models = provider.list_models().await?;

    println!("🤖 {} model(s) available", models.len());
    for model in models {
        println!("  - {model}");
    }

    Ok(())
}
