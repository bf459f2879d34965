//! `scrollfolio sequence` — Show the frame sequence the page will load.

use scrollfolio_sequence::get_sequence_data;
use std::path::Path;

pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path)?;
    let data = get_sequence_data(&config.sequence).await;

    println!("{}", serde_json::to_string_pretty(&data)?);
    if data.frame_count > 0 {
        println!("\n  First frame: {}", data.frame_url(0));
        println!("  Last frame:  {}", data.frame_url(data.frame_count - 1));
    }

    Ok(())
}
