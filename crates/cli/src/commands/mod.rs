pub mod ask;
pub mod doctor;
pub mod init;
pub mod models;
pub mod render_frame;
pub mod sequence;
pub mod serve;
pub mod verify_ai;
pub mod verify_email;

use scrollfolio_config::AppConfig;
use std::path::Path;

/// Load configuration the same way the server does (file, `.env.local`, env).
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    AppConfig::load(path).map_err(|e| format!("Failed to load config: {e}").into())
}
