use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use tiny_skia::{Path, PathBuilder, Transform};

use crate::coords::Vec2;

use super::outline;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
///
/// Handles are borrowed references into the system's font table; holders
/// never own or free the font itself.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Vertical font metrics at a given size.
///
/// Both values are positive distances from the baseline: `ascent` above it,
/// `descent` below it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl LineMetrics {
    /// Metrics used when no font is available at all.
    #[inline]
    pub fn fallback(size: f32) -> Self {
        Self { ascent: size * 0.8, descent: size * 0.2 }
    }

    /// Distance from the top of the ascent to the bottom of the descent.
    #[inline]
    pub fn height(self) -> f32 {
        self.ascent + self.descent
    }
}

/// A glyph placed by [`FontSystem::layout_glyphs`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PositionedGlyph {
    /// Pen position of the glyph, relative to the left end of the baseline.
    pub pen: Vec2,
    pub glyph_index: u16,
}

/// A parsed font plus the bytes it was parsed from.
///
/// `fontdue` handles layout and metrics; outlines are read from `data`
/// with `ttf-parser` when a run is turned into a path.
struct LoadedFont {
    font: fontdue::Font,
    data: Vec<u8>,
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The first loaded font is the host
/// default: runs whose font is absent or unknown resolve to it.
pub struct FontSystem {
    fonts: Vec<LoadedFont>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in paints and draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        ttf_parser::Face::parse(bytes, 0).map_err(|e| FontLoadError(e.to_string()))?;

        let id = FontId(self.fonts.len());
        log::debug!("loaded font {:?} ({} glyphs)", id, font.glyph_count());
        self.fonts.push(LoadedFont { font, data: bytes.to_vec() });
        Ok(id)
    }

    /// Resolves a paint's font to a loaded font, falling back to the default.
    fn resolve(&self, id: Option<FontId>) -> Option<&LoadedFont> {
        match id {
            Some(id) => self.fonts.get(id.0).or_else(|| {
                log::warn!("unknown font {:?}, using default font", id);
                self.fonts.first()
            }),
            None => self.fonts.first(),
        }
    }

    /// Ascent and descent of `font` at `size`.
    ///
    /// Falls back to [`LineMetrics::fallback`] when no font is loaded or the
    /// font carries no horizontal metrics.
    #[must_use]
    pub fn line_metrics(&self, font: Option<FontId>, size: f32) -> LineMetrics {
        self.resolve(font)
            .and_then(|f| f.font.horizontal_line_metrics(size))
            .map(|m| LineMetrics { ascent: m.ascent, descent: -m.descent })
            .unwrap_or_else(|| LineMetrics::fallback(size))
    }

    /// Single-line advance width of `text` in logical pixels.
    #[must_use]
    pub fn advance_width(&self, text: &str, font: Option<FontId>, size: f32) -> f32 {
        self.measure_text(text, font, size, None).x
    }

    /// Computes the bounding box of a laid-out text string.
    ///
    /// Returns `(width, height)` in logical pixels. Used by the UI layer for
    /// layout without needing direct access to `fontdue::Font`.
    #[must_use]
    pub fn measure_text(&self, text: &str, font: Option<FontId>, size: f32, max_width: Option<f32>) -> Vec2 {
        let Some(loaded) = self.resolve(font) else {
            return Vec2::new(0.0, size * 1.2);
        };
        let font = &loaded.font;

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings { max_width, ..LayoutSettings::default() });
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, size * 1.2);
        }

        // Use the pen position *after* each glyph (= g.x - xmin + advance_width)
        // rather than the bitmap right edge, so trailing spaces and side bearings
        // count towards the width the same way they count towards centering.
        let w = glyphs.iter().map(|g| {
            let m = font.metrics_indexed(g.key.glyph_index, size);
            (g.x - m.xmin as f32 + m.advance_width).max(0.0)
        }).fold(0.0f32, f32::max);
        let h = glyphs.iter().map(|g| g.y + g.height as f32).fold(size, f32::max);
        Vec2::new(w, h)
    }

    /// Lays out a single line of `text`; pens sit on the baseline (y = 0).
    ///
    /// Returns an empty list when no font is loaded.
    pub fn layout_glyphs(&self, text: &str, font: Option<FontId>, size: f32) -> Vec<PositionedGlyph> {
        let Some(loaded) = self.resolve(font) else {
            return Vec::new();
        };
        let f = &loaded.font;

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[f], &TextStyle::new(text, size, 0));

        layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = f.metrics_indexed(g.key.glyph_index, size);
                PositionedGlyph {
                    pen: Vec2::new(g.x - m.xmin as f32, 0.0),
                    glyph_index: g.key.glyph_index,
                }
            })
            .collect()
    }

    /// Outline of a whole text run in logical pixels, baseline at y = 0.
    ///
    /// `None` when no font is loaded or the run has no visible glyphs.
    pub fn text_path(&self, text: &str, font: Option<FontId>, size: f32) -> Option<Path> {
        let loaded = self.resolve(font)?;
        let face = ttf_parser::Face::parse(&loaded.data, 0).ok()?;
        let scale = size / f32::from(face.units_per_em().max(1));

        let mut builder = PathBuilder::new();
        for glyph in self.layout_glyphs(text, font, size) {
            let Some(outline) = outline::glyph_path(&face, glyph.glyph_index) else {
                continue;
            };
            // Design units are y-up; flip into y-down logical pixels.
            let place = Transform::from_row(scale, 0.0, 0.0, -scale, glyph.pen.x, glyph.pen.y);
            if let Some(placed) = outline.transform(place) {
                builder.push_path(&placed);
            }
        }
        builder.finish()
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_font_rejects_garbage() {
        let err = FontSystem::new().load_font(b"definitely not a font").unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
    }

    #[test]
    fn metrics_fall_back_without_font() {
        let m = FontSystem::new().line_metrics(None, 20.0);
        assert_eq!(m, LineMetrics { ascent: 16.0, descent: 4.0 });
        assert_eq!(m.height(), 20.0);
    }

    #[test]
    fn measure_without_font_has_zero_width() {
        let fonts = FontSystem::new();
        assert_eq!(fonts.advance_width("AB", None, 20.0), 0.0);
        assert_eq!(fonts.measure_text("AB", None, 20.0, None).y, 24.0);
    }

    #[test]
    fn layout_without_font_is_empty() {
        assert!(FontSystem::new().layout_glyphs("AB", None, 20.0).is_empty());
    }

    #[test]
    fn text_path_without_font_is_none() {
        assert!(FontSystem::new().text_path("AB", None, 20.0).is_none());
    }
}
