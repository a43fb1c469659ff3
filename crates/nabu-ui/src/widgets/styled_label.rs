use nabu_engine::coords::{Rect, Vec2};
use nabu_engine::paint::{Color, ColorParseError, LinearGradient, Paint, TextPaint};
use nabu_engine::text::{FontId, LineMetrics};

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::{Painter, TextSurface};
use crate::widget::Widget;

/// Text size used until the host sets one, in logical pixels.
pub const DEFAULT_TEXT_SIZE: f32 = 14.0;

// ── StyleConfig ───────────────────────────────────────────────────────────

/// Construction-time look of a [`StyledLabel`].
///
/// Fixed for the widget's lifetime; hand a new one to
/// [`StyledLabel::initialize`] to restyle.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub gradient_start: Color,
    pub gradient_center: Color,
    pub gradient_end: Color,
    pub border_color: Color,
    /// Stroke width in logical pixels.
    pub border_width: f32,
    /// `None` draws with the host's default font.
    pub font: Option<FontId>,
}

impl Default for StyleConfig {
    /// Purple-to-magenta fill (`#943DFF → #E642FF → #E642FF`) with a 5px white border.
    fn default() -> Self {
        let magenta = Color::from_srgb_u8(0xE6, 0x42, 0xFF, 0xFF);
        Self {
            gradient_start: Color::from_srgb_u8(0x94, 0x3D, 0xFF, 0xFF),
            gradient_center: magenta,
            gradient_end: magenta,
            border_color: Color::WHITE,
            border_width: 5.0,
            font: None,
        }
    }
}

impl StyleConfig {
    /// Builds a config from hex color literals (`#rrggbb` / `#rrggbbaa`).
    pub fn from_hex(
        start: &str,
        center: &str,
        end: &str,
        border: &str,
        border_width: f32,
    ) -> Result<Self, ColorParseError> {
        Ok(Self {
            gradient_start: Color::from_hex(start)?,
            gradient_center: Color::from_hex(center)?,
            gradient_end: Color::from_hex(end)?,
            border_color: Color::from_hex(border)?,
            border_width,
            font: None,
        })
    }

    pub fn gradient_colors(mut self, start: Color, center: Color, end: Color) -> Self {
        self.gradient_start = start;
        self.gradient_center = center;
        self.gradient_end = end;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    pub fn font(mut self, font: FontId) -> Self {
        self.font = Some(font);
        self
    }

    /// Fill gradient spanning `x ∈ [0, width]`.
    pub fn gradient(&self, width: f32) -> LinearGradient {
        LinearGradient::horizontal(
            width,
            &[self.gradient_start, self.gradient_center, self.gradient_end],
        )
    }
}

// ── LabelPaints ───────────────────────────────────────────────────────────

/// Stroke and fill paints derived from a config, a text size and a width.
///
/// Always rebuilt as a whole so the two paints can never disagree on font
/// or size.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPaints {
    pub border: TextPaint,
    pub fill: TextPaint,
}

impl LabelPaints {
    pub fn derive(config: &StyleConfig, text_size: f32, width: f32) -> Self {
        Self {
            border: TextPaint::stroke(
                config.border_color,
                config.border_width,
                config.font,
                text_size,
            ),
            fill: TextPaint::fill(config.gradient(width), config.font, text_size),
        }
    }

    /// The fill gradient, if the fill is gradient-sourced.
    pub fn gradient(&self) -> Option<&LinearGradient> {
        match &self.fill.source {
            Paint::LinearGradient(g) => Some(g),
            Paint::Solid(_) => None,
        }
    }
}

/// Baseline origin that centres a text run inside `bounds`.
///
/// Horizontally the advance is centred; vertically the ascent/descent span
/// is. Degenerate bounds (zero or negative) are fine and just move the origin.
#[inline]
pub fn text_origin(bounds: Vec2, text_width: f32, metrics: LineMetrics) -> Vec2 {
    let centre = Rect::from_size(bounds).center();
    Vec2::new(
        centre.x - text_width / 2.0,
        centre.y + (metrics.ascent - metrics.descent) / 2.0,
    )
}

// ── StyledLabel ───────────────────────────────────────────────────────────

/// A single-line label drawn with a solid border stroke under a
/// left-to-right three-color gradient fill, centred in its bounds.
///
/// # Example
/// ```rust,ignore
/// let mut label = StyledLabel::new("LEVEL UP", StyleConfig::default().font(font))
///     .with_text_size(48.0);
/// let draw_list = ui.frame(&mut label, Vec2::new(400.0, 120.0));
/// ```
#[derive(Debug, Clone)]
pub struct StyledLabel {
    text: String,
    text_size: f32,
    config: StyleConfig,
    size: Vec2,
    paints: LabelPaints,
    redraw_requested: bool,
}

impl StyledLabel {
    pub fn new(text: impl Into<String>, config: StyleConfig) -> Self {
        let paints = LabelPaints::derive(&config, DEFAULT_TEXT_SIZE, 0.0);
        Self {
            text: text.into(),
            text_size: DEFAULT_TEXT_SIZE,
            config,
            size: Vec2::zero(),
            paints,
            redraw_requested: false,
        }
    }

    pub fn with_text_size(mut self, size: f32) -> Self {
        self.set_text_size(size);
        self
    }

    /// Applies `config` and re-derives both paints for the current text size
    /// and width.
    ///
    /// Before the first layout the width is zero and the gradient is
    /// degenerate; the first size change fixes it.
    pub fn initialize(&mut self, config: StyleConfig) {
        self.config = config;
        self.rederive();
        log::debug!(
            "styled label initialized: border {}px, text size {}",
            self.config.border_width, self.text_size
        );
    }

    /// Sets the font size of both paints and requests a redraw.
    pub fn set_text_size(&mut self, size: f32) {
        self.text_size = size;
        self.rederive();
        self.redraw_requested = true;
        log::trace!("styled label text size -> {size}");
    }

    /// Replaces the label text, requesting a redraw if it changed.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.redraw_requested = true;
        }
    }

    /// Draws the text centred in the current bounds: border stroke first,
    /// gradient fill second, at the same baseline origin.
    pub fn render<S: TextSurface + ?Sized>(&self, surface: &mut S) {
        let text_width = surface.measure_text(&self.text, &self.paints.fill);
        let metrics = surface.line_metrics(&self.paints.fill);
        let origin = text_origin(self.size, text_width, metrics);

        surface.draw_text(&self.text, origin, &self.paints.border);
        surface.draw_text(&self.text, origin, &self.paints.fill);
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    #[inline]
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    #[inline]
    pub fn paints(&self) -> &LabelPaints {
        &self.paints
    }

    fn rederive(&mut self) {
        self.paints = LabelPaints::derive(&self.config, self.text_size, self.size.x);
    }
}

impl Widget for StyledLabel {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let font = self.config.font;
        let width = ctx.fonts.advance_width(&self.text, font, self.text_size);
        let metrics = ctx.fonts.line_metrics(font, self.text_size);
        // The stroke spills half its width past the glyph outline on each side.
        let border = self.config.border_width.max(0.0);
        constraints.constrain(Vec2::new(width + border, metrics.height() + border))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.with_origin(rect.origin, |p| self.render(p));
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    /// Stores the new bounds and rebuilds both paints, gradient included.
    fn on_size_changed(&mut self, new_size: Vec2, _old_size: Vec2) {
        self.size = new_size;
        self.rederive();
        log::trace!("styled label gradient span -> [0, {}]", new_size.x);
    }

    fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
