//! Coalesces scroll and resize requests into at most one draw per tick.

use crate::renderer::Renderer;
use crate::scroll::{clamp_fraction, frame_index};
use crate::surface::Surface;

/// Pending render work between animation ticks. Later requests overwrite
/// earlier ones; resize re-renders at the last known scroll fraction.
#[derive(Debug, Default)]
pub struct RenderScheduler {
    last_fraction: f64,
    pending_size: Option<(u32, u32)>,
    dirty: bool,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_fraction(&self) -> f64 {
        self.last_fraction
    }

    pub fn is_pending(&self) -> bool {
        self.dirty
    }

    pub fn request_scroll(&mut self, fraction: f64) {
        self.last_fraction = clamp_fraction(fraction);
        self.dirty = true;
    }

    pub fn request_resize(&mut self, width: u32, height: u32) {
        self.pending_size = Some((width, height));
        self.dirty = true;
    }

    /// Run the coalesced work for this tick. Returns the frame drawn, if any.
    pub fn tick<S: Surface>(&mut self, renderer: &mut Renderer<S>) -> Option<usize> {
        if !std::mem::take(&mut self.dirty) {
            return None;
        }
        if let Some((width, height)) = self.pending_size.take() {
            renderer.resize(width, height);
        }
        renderer.render(frame_index(self.last_fraction, renderer.frame_count()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::tests::{RecordingSurface, TestFrame};

    fn loaded_renderer(count: usize) -> Renderer<RecordingSurface> {
        let mut r = Renderer::new(RecordingSurface::sized(100, 100), count);
        for i in 0..count {
            r.frames_mut().insert(i, TestFrame::new(i));
        }
        r
    }

    #[test]
    fn many_scrolls_draw_once_with_latest() {
        let mut r = loaded_renderer(11);
        let mut s = RenderScheduler::new();
        s.request_scroll(0.1);
        s.request_scroll(0.3);
        s.request_scroll(0.8);

        assert_eq!(s.tick(&mut r), Some(8));
        assert_eq!(s.tick(&mut r), None);
        assert_eq!(r.surface().drawn(), vec![8]);
    }

    #[test]
    fn resize_rerenders_last_fraction() {
        let mut r = loaded_renderer(11);
        let mut s = RenderScheduler::new();
        s.request_scroll(0.5);
        s.tick(&mut r);

        s.request_resize(300, 200);
        assert!(s.is_pending());
        assert_eq!(s.tick(&mut r), Some(5));
        assert_eq!(r.surface().size(), (300, 200));
        assert_eq!(r.surface().drawn(), vec![5, 5]);
    }

    #[test]
    fn clamps_requested_fraction() {
        let mut r = loaded_renderer(4);
        let mut s = RenderScheduler::new();
        s.request_scroll(3.0);
        assert_eq!(s.last_fraction(), 1.0);
        assert_eq!(s.tick(&mut r), Some(3));
    }

    #[test]
    fn idle_tick_does_nothing() {
        let mut r = loaded_renderer(2);
        let mut s = RenderScheduler::new();
        assert_eq!(s.tick(&mut r), None);
        assert!(r.surface().draws.is_empty());
    }
}
