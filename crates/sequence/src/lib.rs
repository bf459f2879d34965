//! Scroll-driven frame sequence for the portfolio hero section.
//!
//! The server side counts the `frame_NNN.png` files ([`get_sequence_data`]).
//! The rest models the page's canvas renderer so it can be exercised and
//! rendered offline: frames load progressively into a sparse
//! [`FrameStore`], scroll position maps onto a frame index, and the
//! [`Renderer`] draws the nearest loaded frame with cover-fit scaling.

pub mod fit;
pub mod loader;
pub mod offline;
pub mod overlay;
pub mod provider;
pub mod renderer;
pub mod scheduler;
pub mod scroll;
pub mod store;
pub mod surface;

pub use fit::{DrawRect, cover_fit};
pub use loader::{BATCH_SIZE, FrameSource, FsFrameSource, LoadReport, load_first_frame, load_remaining};
pub use offline::{RenderOutcome, render_to_png};
pub use overlay::{OVERLAY_SECTIONS, OverlaySection};
pub use provider::{SequenceData, frame_file_name, frame_url, get_sequence_data};
pub use renderer::Renderer;
pub use scheduler::RenderScheduler;
pub use scroll::{frame_index, scroll_fraction};
pub use store::FrameStore;
pub use surface::{FrameImage, RgbaCanvas, Surface};
