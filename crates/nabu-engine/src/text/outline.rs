//! Glyph outlines as tiny-skia paths.
//!
//! Outlines are emitted in font design units (y-up); callers scale and flip
//! them when placing glyphs.

use tiny_skia::{Path, PathBuilder};

/// Receives `ttf_parser` outline commands and records them into a path.
pub(crate) struct GlyphOutlineBuilder {
    builder: PathBuilder,
}

impl GlyphOutlineBuilder {
    pub(crate) fn new() -> Self {
        Self { builder: PathBuilder::new() }
    }

    pub(crate) fn finish(self) -> Option<Path> {
        self.builder.finish()
    }
}

impl ttf_parser::OutlineBuilder for GlyphOutlineBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

/// Outline of `glyph_id` in design units. `None` for empty glyphs (spaces).
pub(crate) fn glyph_path(face: &ttf_parser::Face<'_>, glyph_id: u16) -> Option<Path> {
    let mut builder = GlyphOutlineBuilder::new();
    face.outline_glyph(ttf_parser::GlyphId(glyph_id), &mut builder)?;
    builder.finish()
}
