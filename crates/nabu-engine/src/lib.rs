//! Nabu engine crate.
//!
//! Host-side pieces the widget layer builds on: geometry, the paint model,
//! fonts and metrics, the draw-list scene and a CPU rasterizer.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
