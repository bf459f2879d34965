//! Generative-text provider implementations for Scrollfolio.
//!
//! All providers implement the `scrollfolio_core::Provider` trait.

pub mod gemini;

pub use gemini::GeminiProvider;

use scrollfolio_config::ChatConfig;
use scrollfolio_core::Provider;
use std::sync::Arc;

/// Build the configured provider, or `None` when no credential is set.
pub fn build_from_config(config: &ChatConfig) -> Option<Arc<dyn Provider>> {
    let api_key = config
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())?;

    Some(Arc::new(GeminiProvider::new(&config.api_url, api_key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_key_no_provider() {
        assert!(build_from_config(&ChatConfig::default()).is_none());
    }

    #[test]
    fn key_builds_gemini() {
        let config = ChatConfig {
            api_key: Some("test-key".into()),
            ..ChatConfig::default()
        };
        let provider = build_from_config(&config).unwrap();
        assert_eq!(provider.name(), "gemini");
    }
}
