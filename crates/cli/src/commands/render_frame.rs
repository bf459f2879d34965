//! `scrollfolio render-frame` — Render one scroll position to a PNG.

use scrollfolio_sequence::render_to_png;
use std::path::Path;

pub async fn run(
    config_path: Option<&Path>,
    at: f64,
    out: &Path,
    size: (u32, u32),
) -> Result<(), Box<dyn std::error::Error>> {
    if size.0 == 0 || size.1 == 0 {
        return Err("width and height must be non-zero".into());
    }
    let config = super::load_config(config_path)?;

    let outcome = render_to_png(&config.sequence, at, size, out).await?;

    println!(
        "🎞️  {} frames loaded, {} skipped",
        outcome.report.loaded, outcome.report.skipped
    );
    match outcome.drawn {
        Some(drawn) if drawn == outcome.target => {
            println!("✅ Frame {drawn} → {}", out.display());
        }
        Some(drawn) => println!(
            "⚠️  Frame {} unavailable, drew nearest frame {drawn} → {}",
            outcome.target,
            out.display()
        ),
        None => println!("⚠️  No frame could be loaded; wrote an empty canvas to {}", out.display()),
    }

    Ok(())
}
