//! Font loading, text measurement, font metrics and glyph outlines.

mod font_system;
mod outline;

pub use font_system::{FontId, FontLoadError, FontSystem, LineMetrics, PositionedGlyph};
