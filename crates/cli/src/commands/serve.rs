//! `scrollfolio serve` — Start the portfolio web server.

use std::path::Path;

pub async fn run(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = super::load_config(config_path)?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    println!("🎞️  Scrollfolio");
    println!("   Listening: http://{}", config.server.addr());
    println!("   Chat strategy: {}", config.chat.strategy);
    println!("   Frames: {}", config.sequence.dir.display());
    println!(
        "   Contact email: {}",
        if config.mail.has_credentials() { "configured" } else { "not configured" }
    );

    scrollfolio_gateway::start(config).await?;

    Ok(())
}
