use tiny_skia::{FillRule, GradientStop, Path, Pixmap, Point, Shader, Stroke, Transform};

use crate::coords::Vec2;
use crate::paint::{self, Color, PaintStyle, SpreadMode, TextPaint};
use crate::scene::{DrawCmd, DrawList, TextCmd};
use crate::text::FontSystem;

/// Paints every command in `draw_list` into `target`, back to front.
///
/// Fill runs fill the glyph outlines. Stroke runs stroke them with the
/// paint's width, centred on the outline, so a fill recorded after a stroke
/// leaves the stroke visible only outside the glyphs.
pub fn rasterize(draw_list: &mut DrawList, fonts: &FontSystem, target: &mut Pixmap) {
    let mut runs = 0usize;
    for item in draw_list.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::Text(cmd) => {
                rasterize_text(cmd, fonts, target);
                runs += 1;
            }
        }
    }
    log::trace!("rasterized {runs} text runs into {}x{}", target.width(), target.height());
}

fn rasterize_text(cmd: &TextCmd, fonts: &FontSystem, target: &mut Pixmap) {
    let Some(path) = fonts.text_path(&cmd.text, cmd.paint.font, cmd.paint.size) else {
        return;
    };
    let Some(path) = path.transform(Transform::from_translate(cmd.baseline.x, cmd.baseline.y)) else {
        return;
    };
    paint_path(target, &path, &cmd.paint, cmd.paint_origin);
}

/// Fills or strokes `path` (scene coordinates) with `paint`.
///
/// Paint sources live in paint space: a gradient defined over `[0, w]` covers
/// scene `x ∈ [paint_origin.x, paint_origin.x + w]`.
pub fn paint_path(target: &mut Pixmap, path: &Path, paint: &TextPaint, paint_origin: Vec2) {
    let sk_paint = tiny_skia::Paint {
        shader: shader_for(&paint.source, paint_origin),
        anti_alias: true,
        ..tiny_skia::Paint::default()
    };

    match paint.style {
        PaintStyle::Fill => {
            target.fill_path(path, &sk_paint, FillRule::Winding, Transform::identity(), None);
        }
        PaintStyle::Stroke => {
            if paint.stroke_width <= 0.0 {
                return;
            }
            let stroke = Stroke { width: paint.stroke_width, ..Stroke::default() };
            target.stroke_path(path, &sk_paint, &stroke, Transform::identity(), None);
        }
    }
}

/// Overwrites every pixel of `target` with `color`.
pub fn clear(target: &mut Pixmap, color: Color) {
    target.fill(to_sk_color(color));
}

fn shader_for(source: &paint::Paint, origin: Vec2) -> Shader<'static> {
    let g = match source {
        paint::Paint::Solid(c) => return Shader::SolidColor(to_sk_color(*c)),
        paint::Paint::LinearGradient(g) => g,
    };
    if !g.is_valid() {
        // Zero-length axis or too few stops: same answer as `sample`.
        return Shader::SolidColor(to_sk_color(g.sample(Vec2::zero())));
    }

    let start = g.start + origin;
    let end = g.end + origin;
    let stops = g.stops.iter().map(|s| GradientStop::new(s.t, to_sk_color(s.color))).collect();
    tiny_skia::LinearGradient::new(
        Point::from_xy(start.x, start.y),
        Point::from_xy(end.x, end.y),
        stops,
        to_sk_spread(g.spread),
        Transform::identity(),
    )
    .unwrap_or_else(|| {
        log::warn!("gradient rejected by rasterizer, using first stop");
        Shader::SolidColor(to_sk_color(g.sample(Vec2::zero())))
    })
}

fn to_sk_color(c: Color) -> tiny_skia::Color {
    let (r, g, b, a) = c.to_straight();
    tiny_skia::Color::from_rgba(
        r.clamp(0.0, 1.0),
        g.clamp(0.0, 1.0),
        b.clamp(0.0, 1.0),
        a.clamp(0.0, 1.0),
    )
    .unwrap_or(tiny_skia::Color::TRANSPARENT)
}

fn to_sk_spread(mode: SpreadMode) -> tiny_skia::SpreadMode {
    match mode {
        SpreadMode::Pad => tiny_skia::SpreadMode::Pad,
        SpreadMode::Repeat => tiny_skia::SpreadMode::Repeat,
        SpreadMode::Reflect => tiny_skia::SpreadMode::Reflect,
    }
}
