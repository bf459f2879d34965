//! Discovers how many frames the sequence directory holds.

use scrollfolio_config::SequenceConfig;
use scrollfolio_core::SequenceError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, error};

pub const FRAME_PREFIX: &str = "frame_";
pub const FRAME_EXTENSION: &str = ".png";

/// What the page needs to start loading frames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceData {
    pub frame_count: usize,
    pub sequence_path: String,
}

impl SequenceData {
    /// URL of frame `index` under this sequence's public path.
    pub fn frame_url(&self, index: usize) -> String {
        frame_url(&self.sequence_path, index)
    }
}

/// Count the frames and report where they are served from.
///
/// Never fails: an unreadable directory is logged and reported as zero frames.
pub async fn get_sequence_data(config: &SequenceConfig) -> SequenceData {
    let frame_count = match count_frames(&config.dir).await {
        Ok(count) => count,
        Err(e) => {
            error!(error = %e, "Error reading sequence directory");
            0
        }
    };

    SequenceData {
        frame_count,
        sequence_path: config.public_path.clone(),
    }
}

/// Number of `frame_*.png` entries in `dir`.
pub async fn count_frames(dir: &Path) -> Result<usize, SequenceError> {
    let read_err = |e: std::io::Error| SequenceError::ReadDir {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(read_err)?;
    let mut count = 0;
    while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
        if entry.file_name().to_str().is_some_and(is_frame_file_name) {
            count += 1;
        }
    }

    debug!(dir = %dir.display(), count, "Counted sequence frames");
    Ok(count)
}

pub fn is_frame_file_name(name: &str) -> bool {
    name.starts_with(FRAME_PREFIX) && name.ends_with(FRAME_EXTENSION)
}

/// `frame_007.png` for index 7. Indices above 999 widen naturally.
pub fn frame_file_name(index: usize) -> String {
    format!("{FRAME_PREFIX}{index:03}{FRAME_EXTENSION}")
}

pub fn frame_url(public_path: &str, index: usize) -> String {
    format!("{}/{}", public_path.trim_end_matches('/'), frame_file_name(index))
}
