//! Renders one scroll position to a PNG without a browser.

use crate::loader::{FsFrameSource, LoadReport, load_first_frame, load_remaining};
use crate::provider::count_frames;
use crate::renderer::Renderer;
use crate::scheduler::RenderScheduler;
use crate::scroll::frame_index;
use crate::surface::RgbaCanvas;
use scrollfolio_config::SequenceConfig;
use scrollfolio_core::SequenceError;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    pub frame_count: usize,
    pub target: usize,
    /// The frame actually drawn; differs from `target` when it failed to load.
    pub drawn: Option<usize>,
    pub report: LoadReport,
}

/// Load the whole sequence, render the frame for `fraction` on a
/// `width` x `height` canvas and save it to `out`.
pub async fn render_to_png(
    config: &SequenceConfig,
    fraction: f64,
    (width, height): (u32, u32),
    out: &Path,
) -> Result<RenderOutcome, SequenceError> {
    let frame_count = count_frames(&config.dir).await?;
    let target = frame_index(fraction, frame_count);
    if frame_count == 0 {
        return Err(SequenceError::OutOfRange {
            index: target,
            frame_count,
        });
    }

    let source = FsFrameSource::new(&config.dir);
    let mut renderer = Renderer::new(RgbaCanvas::new(width, height), frame_count);
    let first_ok = load_first_frame(&mut renderer, &source).await;
    let mut report = load_remaining(&mut renderer, &source).await;
    if first_ok {
        report.loaded += 1;
    } else {
        report.skipped += 1;
    }

    let mut scheduler = RenderScheduler::new();
    scheduler.request_scroll(fraction);
    let drawn = scheduler.tick(&mut renderer);

    renderer.into_surface().save_png(out)?;
    info!(requested = target, ?drawn, out = %out.display(), "Rendered frame to PNG");

    Ok(RenderOutcome {
        frame_count,
        target,
        drawn,
        report,
    })
}
