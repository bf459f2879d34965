//! `scrollfolio doctor` — Diagnose configuration, profile and frame sequence.

use scrollfolio_config::{AppConfig, CONFIG_FILE, ChatStrategy};
use scrollfolio_core::KnowledgeBase;
use scrollfolio_sequence::provider::count_frames;
use std::path::Path;

pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 Scrollfolio Doctor — Site Diagnostics");
    println!("========================================\n");

    let mut issues = 0;

    let file = config_path.unwrap_or(Path::new(CONFIG_FILE));
    if file.exists() {
        println!("  ✅ Config file found: {}", file.display());
    } else {
        println!("  ℹ️  No {} — using defaults (run `scrollfolio init`)", file.display());
    }

    let config = match AppConfig::load(config_path) {
        Ok(config) => {
            println!("  ✅ Configuration valid");
            config
        }
        Err(e) => {
            println!("  ❌ Configuration invalid: {e}");
            println!("\n  ⚠️  Fix the configuration before running other checks.");
            return Ok(());
        }
    };

    match KnowledgeBase::load_or_builtin(config.profile.path.as_deref()) {
        Ok(kb) => println!(
            "  ✅ Profile: {} ({} skills, {} social links)",
            kb.profile.name,
            kb.profile.skills.len(),
            kb.socials.len()
        ),
        Err(e) => {
            println!("  ❌ Profile failed to load: {e}");
            issues += 1;
        }
    }

    match count_frames(&config.sequence.dir).await {
        Ok(0) => {
            println!(
                "  ⚠️  No frame_*.png files in {} — the hero canvas will stay hidden",
                config.sequence.dir.display()
            );
            issues += 1;
        }
        Ok(n) => println!("  ✅ {n} frames in {}", config.sequence.dir.display()),
        Err(e) => {
            println!("  ❌ {e}");
            issues += 1;
        }
    }

    match (config.chat.strategy, config.has_api_key()) {
        (ChatStrategy::Keyword, _) => println!("  ✅ Chat: keyword responder (no API key needed)"),
        (ChatStrategy::Llm, true) => println!("  ✅ Chat: LLM responder using {}", config.chat.model),
        (ChatStrategy::Llm, false) => {
            println!("  ⚠️  Chat: LLM strategy but GEMINI_API_KEY is not set — replies will be canned");
            issues += 1;
        }
    }

    if config.mail.has_credentials() {
        println!(
            "  ✅ Contact email: {} via {}",
            config.mail.owner().unwrap_or_default(),
            config.mail.smtp_host
        );
    } else {
        println!("  ⚠️  Contact email: GMAIL_USER / GMAIL_PASS not set — the form cannot send");
        issues += 1;
    }

    if config.server.public_dir.is_dir() {
        println!("  ✅ Public directory: {}", config.server.public_dir.display());
    } else {
        println!(
            "  ⚠️  Public directory {} does not exist — social icons will 404",
            config.server.public_dir.display()
        );
        issues += 1;
    }

    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
