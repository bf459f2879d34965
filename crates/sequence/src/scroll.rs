//! Scroll position to frame index mapping.

/// Progress through the scrolly container, from its top meeting the
/// viewport top to its bottom meeting the viewport bottom.
///
/// `scrolled` is how far the container top has moved above the viewport top.
pub fn scroll_fraction(scrolled: f64, container_height: f64, viewport_height: f64) -> f64 {
    let travel = container_height - viewport_height;
    if travel <= 0.0 {
        return 0.0;
    }
    clamp_fraction(scrolled / travel)
}

/// `floor(fraction * (frame_count - 1))` with the fraction clamped to `[0, 1]`.
pub fn frame_index(fraction: f64, frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    let last = frame_count - 1;
    let index = (clamp_fraction(fraction) * last as f64).floor() as usize;
    index.min(last)
}

pub(crate) fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_fraction_onto_frames() {
        assert_eq!(frame_index(0.0, 100), 0);
        assert_eq!(frame_index(0.5, 100), 49);
        assert_eq!(frame_index(1.0, 100), 99);
        assert_eq!(frame_index(0.999, 10), 8);
    }

    #[test]
    fn matches_floor_formula() {
        for count in [1usize, 2, 7, 10, 150] {
            for step in 0..=40 {
                let f = step as f64 / 40.0;
                let expected = (f * (count - 1) as f64).floor() as usize;
                assert_eq!(frame_index(f, count), expected, "f={f} count={count}");
            }
        }
    }

    #[test]
    fn out_of_range_fractions_clamp() {
        assert_eq!(frame_index(-0.3, 10), 0);
        assert_eq!(frame_index(1.7, 10), 9);
        assert_eq!(frame_index(f64::NAN, 10), 0);
        assert_eq!(frame_index(0.5, 0), 0);
        assert_eq!(frame_index(0.5, 1), 0);
    }

    #[test]
    fn fraction_from_scroll_offsets() {
        assert_eq!(scroll_fraction(0.0, 5000.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(2000.0, 5000.0, 1000.0), 0.5);
        assert_eq!(scroll_fraction(9000.0, 5000.0, 1000.0), 1.0);
        assert_eq!(scroll_fraction(-50.0, 5000.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(100.0, 800.0, 1000.0), 0.0);
    }
}
