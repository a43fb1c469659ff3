use nabu_engine::coords::Vec2;
use nabu_engine::paint::TextPaint;
use nabu_engine::scene::{DrawList, ZIndex};
use nabu_engine::text::{FontSystem, LineMetrics};

// ── TextSurface ───────────────────────────────────────────────────────────

/// Text drawing capability a widget renders into.
///
/// Coordinates are widget-local logical pixels. [`Painter`] is the host
/// implementation; tests substitute recording surfaces.
pub trait TextSurface {
    /// Single-line advance width of `text` drawn with `paint`.
    fn measure_text(&self, text: &str, paint: &TextPaint) -> f32;

    /// Ascent / descent of `paint`'s font at `paint.size`.
    fn line_metrics(&self, paint: &TextPaint) -> LineMetrics;

    /// Draws `text` with the left end of its baseline at `baseline`.
    fn draw_text(&mut self, text: &str, baseline: Vec2, paint: &TextPaint);
}

// ── Painter ───────────────────────────────────────────────────────────────

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` and `FontSystem`. Every draw gets its own
/// z-slot, so calls land in the list in the order they were made.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    font_system: &'a FontSystem,
    /// Scene position of the current widget-local origin.
    origin: Vec2,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, font_system: &'a FontSystem) -> Self {
        Self { draw_list, font_system, origin: Vec2::zero(), z: 0 }
    }

    /// Runs `f` with the local origin moved by `offset`, restoring it afterwards.
    ///
    /// Widgets call this with their `rect.origin` so they can draw in their
    /// own coordinate space; paint sources (gradients) are anchored there too.
    pub fn with_origin<R>(&mut self, offset: Vec2, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.origin;
        self.origin = saved + offset;
        let out = f(self);
        self.origin = saved;
        out
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

impl TextSurface for Painter<'_> {
    fn measure_text(&self, text: &str, paint: &TextPaint) -> f32 {
        self.font_system.advance_width(text, paint.font, paint.size)
    }

    fn line_metrics(&self, paint: &TextPaint) -> LineMetrics {
        self.font_system.line_metrics(paint.font, paint.size)
    }

    fn draw_text(&mut self, text: &str, baseline: Vec2, paint: &TextPaint) {
        let z = self.next_z();
        let origin = self.origin;
        self.draw_list.push_text_run(z, text, paint, origin + baseline, origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nabu_engine::paint::{Color, PaintStyle};

    #[test]
    fn draws_are_recorded_in_call_order() {
        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        {
            let mut painter = Painter::new(&mut list, &fonts);
            painter.draw_text("a", Vec2::zero(), &TextPaint::stroke(Color::BLACK, 1.0, None, 10.0));
            painter.draw_text("a", Vec2::zero(), &TextPaint::fill(Color::WHITE, None, 10.0));
        }

        let styles: Vec<PaintStyle> = list
            .iter_in_paint_order()
            .map(|item| match &item.cmd {
                nabu_engine::scene::DrawCmd::Text(t) => t.paint.style,
            })
            .collect();
        assert_eq!(styles, vec![PaintStyle::Stroke, PaintStyle::Fill]);
    }

    #[test]
    fn with_origin_translates_and_restores() {
        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        let paint = TextPaint::fill(Color::WHITE, None, 10.0);
        {
            let mut painter = Painter::new(&mut list, &fonts);
            painter.with_origin(Vec2::new(10.0, 20.0), |p| {
                p.with_origin(Vec2::new(1.0, 2.0), |p| p.draw_text("in", Vec2::new(3.0, 4.0), &paint));
            });
            painter.draw_text("out", Vec2::new(3.0, 4.0), &paint);
        }

        let runs: Vec<_> = list.text_runs().collect();
        assert_eq!(runs[0].baseline, Vec2::new(14.0, 26.0));
        assert_eq!(runs[0].paint_origin, Vec2::new(11.0, 22.0));
        assert_eq!(runs[1].baseline, Vec2::new(3.0, 4.0));
        assert_eq!(runs[1].paint_origin, Vec2::zero());
    }

    #[test]
    fn measurement_goes_through_the_font_system() {
        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        let painter = Painter::new(&mut list, &fonts);
        let paint = TextPaint::fill(Color::WHITE, None, 20.0);
        assert_eq!(painter.measure_text("AB", &paint), 0.0);
        assert_eq!(painter.line_metrics(&paint), LineMetrics::fallback(20.0));
    }
}
