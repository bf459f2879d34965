//! Draws the best available frame for a requested index.

use crate::fit::cover_fit;
use crate::store::FrameStore;
use crate::surface::{FrameImage, Surface};
use tracing::trace;

pub struct Renderer<S: Surface> {
    surface: S,
    frames: FrameStore<S::Image>,
    visible: bool,
    last_drawn: Option<usize>,
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S, frame_count: usize) -> Self {
        Self {
            surface,
            frames: FrameStore::new(frame_count),
            visible: false,
            last_drawn: None,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &FrameStore<S::Image> {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut FrameStore<S::Image> {
        &mut self.frames
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// The canvas stays hidden until the first frame has been drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn last_drawn(&self) -> Option<usize> {
        self.last_drawn
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
    }

    /// Draw `target`, or the nearest loaded neighbour.
    ///
    /// Returns the index actually drawn. With nothing loaded this is a no-op.
    pub fn render(&mut self, target: usize) -> Option<usize> {
        let index = self.frames.resolve(target)?;
        let image = self.frames.get(index)?;
        let (width, height) = self.surface.size();

        self.surface.clear();
        if let Some(rect) = cover_fit(image.width(), image.height(), width, height) {
            self.surface.draw(image, rect);
        }
        trace!(requested = target, drawn = index, "Rendered frame");
        self.last_drawn = Some(index);
        Some(index)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::fit::DrawRect;

    /// A frame that only knows its index and size.
    #[derive(Debug, Clone, PartialEq)]
    pub struct TestFrame {
        pub index: usize,
        pub width: u32,
        pub height: u32,
    }

    impl TestFrame {
        pub fn new(index: usize) -> Self {
            Self {
                index,
                width: 16,
                height: 9,
            }
        }
    }

    impl FrameImage for TestFrame {
        fn width(&self) -> u32 {
            self.width
        }
        fn height(&self) -> u32 {
            self.height
        }
    }

    /// Records every operation performed on it.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub width: u32,
        pub height: u32,
        pub clears: usize,
        pub draws: Vec<(usize, DrawRect)>,
    }

    impl RecordingSurface {
        pub fn sized(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                ..Self::default()
            }
        }

        pub fn drawn(&self) -> Vec<usize> {
            self.draws.iter().map(|(i, _)| *i).collect()
        }
    }

    impl Surface for RecordingSurface {
        type Image = TestFrame;

        fn size(&self) -> (u32, u32) {
            (self.width, self.height)
        }
        fn resize(&mut self, width: u32, height: u32) {
            self.width = width;
            self.height = height;
        }
        fn clear(&mut self) {
            self.clears += 1;
        }
        fn draw(&mut self, image: &TestFrame, rect: DrawRect) {
            self.draws.push((image.index, rect));
        }
    }

    fn renderer(count: usize, loaded: &[usize]) -> Renderer<RecordingSurface> {
        let mut r = Renderer::new(RecordingSurface::sized(1600, 900), count);
        for &i in loaded {
            r.frames_mut().insert(i, TestFrame::new(i));
        }
        r
    }

    #[test]
    fn unloaded_target_draws_lower_neighbour() {
        let mut r = renderer(3, &[0, 2]);
        assert_eq!(r.render(1), Some(0));
        assert_eq!(r.surface().drawn(), vec![0]);
    }

    #[test]
    fn falls_forward_when_nothing_below() {
        let mut r = renderer(5, &[3]);
        assert_eq!(r.render(1), Some(3));
    }

    #[test]
    fn no_frames_is_a_noop() {
        let mut r = renderer(0, &[]);
        assert_eq!(r.render(0), None);
        assert_eq!(r.render(42), None);

        let mut r = renderer(4, &[]);
        assert_eq!(r.render(2), None);
        assert_eq!(r.surface().clears, 0);
        assert!(r.surface().draws.is_empty());
    }

    #[test]
    fn clears_before_each_draw() {
        let mut r = renderer(2, &[0, 1]);
        r.render(0);
        r.render(1);
        assert_eq!(r.surface().clears, 2);
        assert_eq!(r.last_drawn(), Some(1));
    }

    #[test]
    fn draw_uses_cover_fit_for_current_size() {
        let mut r = renderer(1, &[0]);
        r.resize(900, 900);
        r.render(0);
        let (_, rect) = r.surface().draws[0];
        assert_eq!(rect.height, 900.0);
        assert_eq!(rect.width, 1600.0);
        assert_eq!(rect.x, -350.0);
    }

    #[test]
    fn starts_hidden() {
        let mut r = renderer(1, &[0]);
        assert!(!r.is_visible());
        r.show();
        assert!(r.is_visible());
    }
}
