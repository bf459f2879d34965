//! Cover-fit placement of a frame on the canvas.

/// Where to draw an image on the surface. Offsets may be negative when the
/// image overflows the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scale the image to cover the canvas, centering the overflowing axis.
///
/// Wider images match the canvas height and overflow horizontally; all
/// others match the width and overflow vertically. Returns `None` when
/// either side has a zero dimension.
pub fn cover_fit(image_w: u32, image_h: u32, canvas_w: u32, canvas_h: u32) -> Option<DrawRect> {
    if image_w == 0 || image_h == 0 || canvas_w == 0 || canvas_h == 0 {
        return None;
    }
    let (iw, ih) = (image_w as f64, image_h as f64);
    let (cw, ch) = (canvas_w as f64, canvas_h as f64);

    let rect = if iw / ih > cw / ch {
        let width = iw * (ch / ih);
        DrawRect {
            x: (cw - width) / 2.0,
            y: 0.0,
            width,
            height: ch,
        }
    } else {
        let height = ih * (cw / iw);
        DrawRect {
            x: 0.0,
            y: (ch - height) / 2.0,
            width: cw,
            height,
        }
    };
    Some(rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_overflows_horizontally() {
        let r = cover_fit(1920, 1080, 1000, 1000).unwrap();
        assert_eq!(r.height, 1000.0);
        assert!((r.width - 1777.777).abs() < 0.01);
        assert!((r.x - (-388.888)).abs() < 0.01);
        assert_eq!(r.y, 0.0);
    }

    #[test]
    fn tall_image_overflows_vertically() {
        let r = cover_fit(1000, 2000, 800, 600).unwrap();
        assert_eq!(r.width, 800.0);
        assert_eq!(r.height, 1600.0);
        assert_eq!(r.x, 0.0);
        assert_eq!(r.y, -500.0);
    }

    #[test]
    fn equal_aspect_fills_exactly() {
        let r = cover_fit(400, 300, 800, 600).unwrap();
        assert_eq!(
            r,
            DrawRect {
                x: 0.0,
                y: 0.0,
                width: 800.0,
                height: 600.0
            }
        );
    }

    #[test]
    fn zero_dimensions_yield_nothing() {
        assert!(cover_fit(0, 10, 10, 10).is_none());
        assert!(cover_fit(10, 10, 10, 0).is_none());
    }
}
