//! Coordinate and geometry types shared across the engine and UI.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//! - Text is positioned by its baseline, not its top edge

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
