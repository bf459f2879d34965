//! `scrollfolio init` — Write a default configuration file.

use scrollfolio_config::{AppConfig, CONFIG_FILE};
use std::path::{Path, PathBuf};

pub async fn run(config_path: Option<&Path>, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let path = config_path.map_or_else(|| PathBuf::from(CONFIG_FILE), Path::to_path_buf);

    if path.exists() && !force {
        println!("⚠️  Config already exists at: {}", path.display());
        println!("   Edit it manually or re-run with --force.");
        return Ok(());
    }

    std::fs::write(&path, AppConfig::default_toml())?;
    println!("✅ Created {}", path.display());
    println!("\n📝 Next steps:");
    println!("   1. Put frames in public/sequences/ as frame_000.png, frame_001.png, ...");
    println!("   2. Add secrets to .env.local (never commit it):");
    println!("        GEMINI_API_KEY=...   # only for chat.strategy = \"llm\"");
    println!("        GMAIL_USER=you@gmail.com");
    println!("        GMAIL_PASS=your-app-password");
    println!("   3. Run: scrollfolio doctor && scrollfolio serve");

    Ok(())
}
