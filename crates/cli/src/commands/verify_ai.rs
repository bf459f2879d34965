//! `scrollfolio verify-ai` — Try a short prompt against known models.

use scrollfolio_core::{Message, Provider, ProviderRequest};
use scrollfolio_providers::GeminiProvider;
use std::path::Path;

pub const DEFAULT_MODELS: [&str; 2] = ["gemini-2.0-flash", "gemini-flash-latest"];

pub async fn run(
    config_path: Option<&Path>,
    models: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path)?;
    let Some(api_key) = config.chat.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
        return Err("GEMINI_API_KEY is not set (environment or .env.local)".into());
    };

    let models = if models.is_empty() {
        DEFAULT_MODELS.iter().map(|m| m.to_string()).collect()
    } else {
        models
    };
    let provider = GeminiProvider::new(&config.chat.api_url, api_key);

    for model in &models {
        println!("\nTesting model: {model}...");
        let request = ProviderRequest::new(model, vec![Message::user("Hi")]);
        match provider.complete(request).await {
            Ok(_) => println!("✅ Success with {model}"),
            Err(e) => {
                let first_line = e.to_string();
                let first_line = first_line.lines().next().unwrap_or_default();
                println!("❌ Failed with {model}: {first_line}");
            }
        }
    }

    Ok(())
}
