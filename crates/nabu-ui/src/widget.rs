use nabu_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The trait every UI component implements.
///
/// All hooks are invoked by the host loop ([`UiScene`](crate::scene::UiScene))
/// on a single thread, in the order: size change (when bounds changed),
/// paint, redraw-request drain. `measure` is called when the host asks for
/// the widget's natural size.
///
/// # Implementing a custom widget
///
/// ```rust,ignore
/// use nabu_ui::prelude::*;
///
/// pub struct Caption { text: String, paint: TextPaint, size: Vec2 }
///
/// impl Widget for Caption {
///     fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
///         let w = ctx.fonts.advance_width(&self.text, self.paint.font, self.paint.size);
///         constraints.constrain(Vec2::new(w, self.paint.size))
///     }
///     fn paint(&self, painter: &mut Painter, rect: Rect) {
///         painter.with_origin(rect.origin, |p| {
///             p.draw_text(&self.text, Vec2::new(0.0, self.paint.size), &self.paint)
///         });
///     }
///     fn size(&self) -> Vec2 {
///         self.size
///     }
///     fn on_size_changed(&mut self, new_size: Vec2, _old_size: Vec2) {
///         self.size = new_size;
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic — calling `measure` twice with the same arguments
    /// must return the same result.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Draw this widget into `painter` within the bounds of `rect`.
    ///
    /// Paint must only read state; anything derived from size belongs in
    /// [`on_size_changed`](Self::on_size_changed).
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Bounds this widget last received through
    /// [`on_size_changed`](Self::on_size_changed); zero before the first one.
    ///
    /// The host compares new bounds against this, so every widget keeps its
    /// own record no matter how many roots share a scene.
    fn size(&self) -> Vec2;

    /// Called whenever the bounds assigned by the host differ from
    /// [`size`](Self::size) (including the first non-zero layout).
    fn on_size_changed(&mut self, _new_size: Vec2, _old_size: Vec2) {}

    /// Returns `true` once per pending redraw request, clearing it.
    fn take_redraw_request(&mut self) -> bool {
        false
    }
}
