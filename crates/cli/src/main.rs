//! Scrollfolio CLI — the main entry point.
//!
//! Commands:
//! - `serve`         — Start the portfolio web server
//! - `init`          — Write a default `scrollfolio.toml`
//! - `doctor`        — Diagnose configuration, profile and frame sequence
//! - `ask`           — Ask the chat assistant a single question
//! - `sequence`      — Show the frame sequence the page will load
//! - `render-frame`  — Render one scroll position to a PNG
//! - `models`        — List generative models available to the API key
//! - `verify-ai`     — Try a short prompt against known models
//! - `verify-email`  — Check SMTP credentials and send a test email

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "scrollfolio",
    about = "Scrollfolio — scroll-driven portfolio with chat and contact backend",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the configuration file (default: ./scrollfolio.toml)
    #[arg(short, long, global = true, env = "SCROLLFOLIO_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the portfolio web server
    Serve {
        /// Override the bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Diagnose configuration, profile and frame sequence
    Doctor,

    /// Ask the chat assistant a single question
    Ask {
        /// The question
        message: String,

        /// Override the configured strategy (keyword | llm)
        #[arg(short, long)]
        strategy: Option<String>,
    },

    /// Show the frame sequence the page will load
    Sequence,

    /// Render the frame for a scroll position to a PNG file
    RenderFrame {
        /// Scroll fraction between 0 and 1
        #[arg(long, default_value_t = 0.0)]
        at: f64,

        /// Output file
        #[arg(short, long, default_value = "frame.png")]
        out: PathBuf,

        /// Canvas width in pixels
        #[arg(long, default_value_t = 1280)]
        width: u32,

        /// Canvas height in pixels
        #[arg(long, default_value_t = 720)]
        height: u32,
    },

    /// List generative models available to the configured API key
    Models,

    /// Send "Hi" to each model and report which ones answer
    VerifyAi {
        /// Models to try (default: gemini-2.0-flash, gemini-flash-latest)
        #[arg(short, long)]
        model: Vec<String>,
    },

    /// Verify SMTP credentials and send a test email to the owner
    VerifyEmail {
        /// Only verify the connection, do not send
        #[arg(long)]
        no_send: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Serve { host, port } => commands::serve::run(config, host, port).await?,
        Commands::Init { force } => commands::init::run(config, force).await?,
        Commands::Doctor => commands::doctor::run(config).await?,
        Commands::Ask { message, strategy } => commands::ask::run(config, &message, strategy).await?,
        Commands::Sequence => commands::sequence::run(config).await?,
        Commands::RenderFrame {
            at,
            out,
            width,
            height,
        } => commands::render_frame::run(config, at, &out, (width, height)).await?,
        Commands::Models => commands::models::run(config).await?,
        Commands::VerifyAi { model } => commands::verify_ai::run(config, model).await?,
        Commands::VerifyEmail { no_send } => commands::verify_email::run(config, no_send).await?,
    }

    Ok(())
}
