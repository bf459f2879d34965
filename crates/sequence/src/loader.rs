//! Progressive frame loading.
//!
//! Frame 0 is loaded on its own so the canvas can appear as early as
//! possible. The rest follow in batches of [`BATCH_SIZE`] concurrent loads,
//! yielding to the runtime between batches. A frame that fails to load is
//! skipped; the renderer covers the gap with a neighbour.

use crate::provider::frame_file_name;
use crate::renderer::Renderer;
use crate::surface::Surface;
use async_trait::async_trait;
use image::{ImageFormat, RgbaImage};
use scrollfolio_core::SequenceError;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub const BATCH_SIZE: usize = 5;

/// Where frames come from.
#[async_trait]
pub trait FrameSource: Send + Sync {
    type Image: Send;

    async fn load(&self, index: usize) -> Result<Self::Image, SequenceError>;
}

/// Outcome of [`load_remaining`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
    pub batches: usize,
}

/// Load frame 0, reveal the canvas and draw it. Returns false (canvas
/// stays hidden) when there are no frames or frame 0 cannot be loaded.
pub async fn load_first_frame<S, F>(renderer: &mut Renderer<S>, source: &F) -> bool
where
    S: Surface,
    F: FrameSource<Image = S::Image>,
{
    if renderer.frame_count() == 0 {
        return false;
    }

    match source.load(0).await {
        Ok(image) => {
            renderer.frames_mut().insert(0, image);
            renderer.show();
            renderer.render(0);
            debug!("First frame ready");
            true
        }
        Err(e) => {
            warn!(error = %e, "First frame failed to load, canvas stays hidden");
            false
        }
    }
}

/// Load frames `1..frame_count` in batches, filling the renderer's store.
pub async fn load_remaining<S, F>(renderer: &mut Renderer<S>, source: &F) -> LoadReport
where
    S: Surface,
    F: FrameSource<Image = S::Image>,
{
    let mut report = LoadReport::default();
    let indices: Vec<usize> = (1..renderer.frame_count()).collect();

    for batch in indices.chunks(BATCH_SIZE) {
        let results =
            futures::future::join_all(batch.iter().map(|&i| async move { (i, source.load(i).await) }))
                .await;

        for (index, result) in results {
            match result {
                Ok(image) => {
                    renderer.frames_mut().insert(index, image);
                    report.loaded += 1;
                }
                Err(e) => {
                    debug!(index, error = %e, "Skipping frame");
                    report.skipped += 1;
                }
            }
        }
        report.batches += 1;
        tokio::task::yield_now().await;
    }

    info!(
        loaded = report.loaded,
        skipped = report.skipped,
        batches = report.batches,
        "Frame sequence loaded"
    );
    report
}

/// Decodes `frame_NNN.png` files from a directory.
#[derive(Debug, Clone)]
pub struct FsFrameSource {
    dir: PathBuf,
}

impl FsFrameSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir.join(frame_file_name(index))
    }
}

#[async_trait]
impl FrameSource for FsFrameSource {
    type Image = RgbaImage;

    async fn load(&self, index: usize) -> Result<RgbaImage, SequenceError> {
        let decode_err = |reason: String| SequenceError::Decode { index, reason };

        let bytes = tokio::fs::read(self.path_for(index))
            .await
            .map_err(|e| decode_err(e.to_string()))?;

        tokio::task::spawn_blocking(move || {
            image::load_from_memory_with_format(&bytes, ImageFormat::Png).map(|img| img.to_rgba8())
        })
        .await
        .map_err(|e| decode_err(e.to_string()))?
        .map_err(|e| decode_err(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::tests::{RecordingSurface, TestFrame};
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves `TestFrame`s, failing for the configured indices and tracking
    /// how many loads are in flight at once.
    #[derive(Default)]
    struct ScriptedSource {
        failing: HashSet<usize>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
        requested: Mutex<Vec<usize>>,
    }

    impl ScriptedSource {
        fn failing(indices: &[usize]) -> Self {
            Self {
                failing: indices.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl FrameSource for ScriptedSource {
        type Image = TestFrame;

        async fn load(&self, index: usize) -> Result<TestFrame, SequenceError> {
            self.requested.lock().unwrap().push(index);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            tokio::task::yield_now().await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if self.failing.contains(&index) {
                Err(SequenceError::Decode {
                    index,
                    reason: "corrupt".into(),
                })
            } else {
                Ok(TestFrame::new(index))
            }
        }
    }

    fn renderer(count: usize) -> Renderer<RecordingSurface> {
        Renderer::new(RecordingSurface::sized(1280, 720), count)
    }

    #[tokio::test]
    async fn first_frame_reveals_and_draws() {
        let mut r = renderer(10);
        let source = ScriptedSource::default();
        assert!(load_first_frame(&mut r, &source).await);
        assert!(r.is_visible());
        assert_eq!(r.surface().drawn(), vec![0]);
    }

    #[tokio::test]
    async fn first_frame_failure_keeps_canvas_hidden() {
        let mut r = renderer(10);
        let source = ScriptedSource::failing(&[0]);
        assert!(!load_first_frame(&mut r, &source).await);
        assert!(!r.is_visible());
        assert!(r.surface().draws.is_empty());
    }

    #[tokio::test]
    async fn empty_sequence_loads_nothing() {
        let mut r = renderer(0);
        let source = ScriptedSource::default();
        assert!(!load_first_frame(&mut r, &source).await);
        assert_eq!(load_remaining(&mut r, &source).await, LoadReport::default());
        assert!(source.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn remaining_frames_load_in_batches_of_five() {
        let mut r = renderer(12);
        let source = ScriptedSource::default();
        let report = load_remaining(&mut r, &source).await;

        assert_eq!(
            report,
            LoadReport {
                loaded: 11,
                skipped: 0,
                batches: 3
            }
        );
        assert_eq!(source.max_in_flight.load(Ordering::SeqCst), BATCH_SIZE);
        assert_eq!(*source.requested.lock().unwrap(), (1..12).collect::<Vec<_>>());
        assert_eq!(r.frames().loaded_count(), 11);
        assert!(!r.frames().is_loaded(0));
    }

    #[tokio::test]
    async fn failures_are_skipped_and_covered_by_neighbours() {
        let mut r = renderer(6);
        let source = ScriptedSource::failing(&[1, 4]);
        load_first_frame(&mut r, &source).await;
        let report = load_remaining(&mut r, &source).await;

        assert_eq!(report.loaded, 3);
        assert_eq!(report.skipped, 2);
        assert_eq!(r.render(1), Some(0));
        assert_eq!(r.render(4), Some(3));
    }

    #[tokio::test]
    async fn fs_source_decodes_png_frames() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::from_pixel(4, 2, image::Rgba([10, 20, 30, 255]))
            .save_with_format(dir.path().join("frame_000.png"), ImageFormat::Png)
            .unwrap();
        std::fs::write(dir.path().join("frame_001.png"), b"not a png").unwrap();

        let source = FsFrameSource::new(dir.path());
        let frame = source.load(0).await.unwrap();
        assert_eq!(frame.dimensions(), (4, 2));
        assert_eq!(frame.get_pixel(0, 0).0, [10, 20, 30, 255]);

        assert!(matches!(
            source.load(1).await,
            Err(SequenceError::Decode { index: 1, .. })
        ));
        assert!(matches!(
            source.load(2).await,
            Err(SequenceError::Decode { index: 2, .. })
        ));
    }
}
