//! Drawing surfaces and an offline RGBA canvas.

use crate::fit::DrawRect;
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};
use scrollfolio_core::SequenceError;
use std::path::Path;

/// Anything with pixel dimensions that a surface can draw.
pub trait FrameImage {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

impl FrameImage for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }
}

/// The drawing target the renderer paints frames onto.
pub trait Surface {
    type Image: FrameImage;

    /// Current pixel size as `(width, height)`.
    fn size(&self) -> (u32, u32);

    fn resize(&mut self, width: u32, height: u32);

    fn clear(&mut self);

    fn draw(&mut self, image: &Self::Image, rect: DrawRect);
}

/// In-memory RGBA surface, used to render frames without a browser.
pub struct RgbaCanvas {
    pixels: RgbaImage,
}

impl RgbaCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn save_png(&self, path: &Path) -> Result<(), SequenceError> {
        self.pixels
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| SequenceError::Write {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }
}

impl Surface for RgbaCanvas {
    type Image = RgbaImage;

    fn size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn resize(&mut self, width: u32, height: u32) {
        if self.size() != (width, height) {
            self.pixels = RgbaImage::new(width, height);
        }
    }

    fn clear(&mut self) {
        self.pixels.pixels_mut().for_each(|p| *p = Rgba([0, 0, 0, 0]));
    }

    /// Only the part of `rect` that lands on the canvas is scaled.
    fn draw(&mut self, image: &RgbaImage, rect: DrawRect) {
        let (canvas_w, canvas_h) = self.size();
        let (image_w, image_h) = image.dimensions();
        if image_w == 0 || image_h == 0 || rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }

        let x0 = rect.x.max(0.0);
        let y0 = rect.y.max(0.0);
        let x1 = (rect.x + rect.width).min(canvas_w as f64);
        let y1 = (rect.y + rect.height).min(canvas_h as f64);
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let scale_x = image_w as f64 / rect.width;
        let scale_y = image_h as f64 / rect.height;
        let src_x = (((x0 - rect.x) * scale_x).floor() as u32).min(image_w - 1);
        let src_y = (((y0 - rect.y) * scale_y).floor() as u32).min(image_h - 1);
        let src_w = (((x1 - rect.x) * scale_x).ceil() as u32)
            .min(image_w)
            .saturating_sub(src_x)
            .max(1);
        let src_h = (((y1 - rect.y) * scale_y).ceil() as u32)
            .min(image_h)
            .saturating_sub(src_y)
            .max(1);

        let dest_x = x0.round();
        let dest_y = y0.round();
        let dest_w = (x1.round() - dest_x).max(1.0) as u32;
        let dest_h = (y1.round() - dest_y).max(1.0) as u32;

        let visible = imageops::crop_imm(image, src_x, src_y, src_w, src_h).to_image();
        let scaled = imageops::resize(&visible, dest_w, dest_h, FilterType::Triangle);
        imageops::overlay(&mut self.pixels, &scaled, dest_x as i64, dest_y as i64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::cover_fit;

    fn solid(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(color))
    }

    #[test]
    fn cover_fit_draw_fills_canvas() {
        let mut canvas = RgbaCanvas::new(40, 20);
        let frame = solid(10, 10, [255, 0, 0, 255]);
        let rect = cover_fit(frame.width(), frame.height(), 40, 20).unwrap();
        canvas.draw(&frame, rect);

        assert!(
            canvas
                .pixels()
                .pixels()
                .all(|p| p.0[0] > 250 && p.0[1] < 5 && p.0[3] > 250)
        );
    }

    #[test]
    fn overflowing_columns_are_cropped() {
        // Left half red, right half blue; the canvas shows the middle.
        let frame = RgbaImage::from_fn(20, 10, |x, _| {
            if x < 10 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        });
        let mut canvas = RgbaCanvas::new(10, 10);
        let rect = cover_fit(20, 10, 10, 10).unwrap();
        assert_eq!(rect.x, -5.0);
        canvas.draw(&frame, rect);

        let left = canvas.pixels().get_pixel(1, 5);
        let right = canvas.pixels().get_pixel(8, 5);
        assert!(left.0[0] > 200 && left.0[2] < 50, "{left:?}");
        assert!(right.0[2] > 200 && right.0[0] < 50, "{right:?}");
    }

    #[test]
    fn extreme_aspect_frame_fills_canvas() {
        let frame = solid(1, 1000, [0, 255, 0, 255]);
        let mut canvas = RgbaCanvas::new(64, 36);
        let rect = cover_fit(1, 1000, 64, 36).unwrap();
        assert_eq!(rect.height, 64_000.0);
        canvas.draw(&frame, rect);

        assert!(canvas.pixels().pixels().all(|p| p.0[1] > 250 && p.0[3] > 250));
    }

    #[test]
    fn clear_resets_to_transparent() {
        let mut canvas = RgbaCanvas::new(4, 4);
        canvas.draw(
            &solid(4, 4, [1, 2, 3, 255]),
            DrawRect {
                x: 0.0,
                y: 0.0,
                width: 4.0,
                height: 4.0,
            },
        );
        canvas.clear();
        assert!(canvas.pixels().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn resize_changes_dimensions() {
        let mut canvas = RgbaCanvas::new(4, 4);
        canvas.resize(8, 2);
        assert_eq!(canvas.size(), (8, 2));
    }

    #[test]
    fn saves_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        RgbaCanvas::new(3, 3).save_png(&path).unwrap();
        assert!(path.exists());

        let err = RgbaCanvas::new(3, 3)
            .save_png(&dir.path().join("missing/out.png"))
            .unwrap_err();
        assert!(matches!(err, SequenceError::Write { .. }));
    }
}
