use crate::text::FontId;

use super::{Color, Paint};

/// How glyph outlines are painted.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PaintStyle {
    /// Paint glyph interiors.
    Fill,
    /// Paint a band of `TextPaint::stroke_width` centred on glyph outlines.
    Stroke,
}

/// Complete description of how one text run is drawn.
///
/// Values are rebuilt rather than edited: widgets derive a fresh `TextPaint`
/// whenever an input (size, width, config) changes, so two paints built
/// from the same inputs compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPaint {
    pub style: PaintStyle,
    /// Stroke band width in logical pixels. Ignored for [`PaintStyle::Fill`].
    pub stroke_width: f32,
    pub source: Paint,
    /// `None` uses the host's default font.
    pub font: Option<FontId>,
    /// Font size in logical pixels.
    pub size: f32,
}

impl TextPaint {
    pub fn fill(source: impl Into<Paint>, font: Option<FontId>, size: f32) -> Self {
        Self { style: PaintStyle::Fill, stroke_width: 0.0, source: source.into(), font, size }
    }

    pub fn stroke(color: Color, width: f32, font: Option<FontId>, size: f32) -> Self {
        Self {
            style: PaintStyle::Stroke,
            stroke_width: width,
            source: Paint::Solid(color),
            font,
            size,
        }
    }

    #[inline]
    pub fn is_stroke(&self) -> bool {
        self.style == PaintStyle::Stroke
    }
}
