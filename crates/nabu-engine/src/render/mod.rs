//! CPU rendering of a recorded [`DrawList`](crate::scene::DrawList) on `tiny-skia`.
//!
//! Headless tools and tests turn a frame into pixels here without a GPU.

mod raster;

pub use raster::{clear, paint_path, rasterize};
pub use tiny_skia::{Path, PathBuilder, Pixmap};
