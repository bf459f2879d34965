//! Text overlay keyframes driven by the same scroll fraction as the canvas.

use crate::scroll::clamp_fraction;
use serde::Serialize;

/// Piecewise-linear mapping from scroll fraction to a value, clamped at
/// both ends.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Track {
    pub input: &'static [f64],
    pub output: &'static [f64],
}

impl Track {
    pub fn sample(&self, fraction: f64) -> f64 {
        let x = clamp_fraction(fraction);
        let (input, output) = (self.input, self.output);
        let (Some(&first), Some(&last)) = (input.first(), input.last()) else {
            return 0.0;
        };
        if x <= first {
            return output[0];
        }
        if x >= last {
            return output[output.len() - 1];
        }

        let upper = input.iter().position(|&k| k >= x).unwrap_or(input.len() - 1);
        let (x0, x1) = (input[upper - 1], input[upper]);
        let (y0, y1) = (output[upper - 1], output[upper]);
        if x1 <= x0 {
            return y1;
        }
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Center,
    Left,
    Right,
}

/// One block of overlay text with its fade and drift tracks.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OverlaySection {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placement: Placement,
    pub opacity: Track,
    /// Vertical offset in pixels.
    pub offset_y: Track,
}

/// Opacity and offset of each section at `fraction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayState {
    pub opacity: f64,
    pub offset_y: f64,
}

impl OverlaySection {
    pub fn state_at(&self, fraction: f64) -> OverlayState {
        OverlayState {
            opacity: self.opacity.sample(fraction),
            offset_y: self.offset_y.sample(fraction),
        }
    }
}

pub const OVERLAY_SECTIONS: [OverlaySection; 3] = [
    OverlaySection {
        title: "VARUN",
        subtitle: "Creative Developer",
        placement: Placement::Center,
        opacity: Track {
            input: &[0.0, 0.15, 0.25],
            output: &[1.0, 1.0, 0.0],
        },
        offset_y: Track {
            input: &[0.0, 0.25],
            output: &[0.0, -30.0],
        },
    },
    OverlaySection {
        title: "Crafting digital experiences",
        subtitle: "that breathe.",
        placement: Placement::Left,
        opacity: Track {
            input: &[0.25, 0.35, 0.45, 0.55],
            output: &[0.0, 1.0, 1.0, 0.0],
        },
        offset_y: Track {
            input: &[0.25, 0.55],
            output: &[40.0, -40.0],
        },
    },
    OverlaySection {
        title: "Bridging Design",
        subtitle: "& Engineering.",
        placement: Placement::Right,
        opacity: Track {
            input: &[0.55, 0.65, 0.75, 0.85],
            output: &[0.0, 1.0, 1.0, 0.0],
        },
        offset_y: Track {
            input: &[0.55, 0.85],
            output: &[40.0, -40.0],
        },
    },
];
