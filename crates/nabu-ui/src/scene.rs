use nabu_engine::coords::{Rect, Vec2};
use nabu_engine::scene::DrawList;
use nabu_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// Host loop that owns shared resources across frames.
///
/// Owns the `FontSystem` and the `DrawList` populated by [`frame`](Self::frame).
/// Size changes are detected against each root's own [`Widget::size`], so
/// several roots can be framed in turn through one scene.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let font = ui.load_font(include_bytes!("my_font.ttf"))?;
/// let mut label = StyledLabel::new("Hello", StyleConfig::default().font(font));
///
/// // Each frame:
/// let draw_list = ui.frame(&mut label, viewport);
/// ```
pub struct UiScene {
    /// Public so the application can split-borrow it alongside `draw_list`
    /// when handing both to a renderer.
    pub font_system: FontSystem,
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new(), draw_list: DrawList::new() }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    ///
    /// The first font loaded becomes the default for paints that name none.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Assigns `viewport` to `root`, reporting a size change if it differs
    /// from the bounds `root` last received.
    pub fn layout<W: Widget + ?Sized>(&mut self, root: &mut W, viewport: Vec2) -> Rect {
        let old = root.size();
        if viewport != old {
            log::debug!("root resized {}x{} -> {}x{}", old.x, old.y, viewport.x, viewport.y);
            root.on_size_changed(viewport, old);
        }
        Rect::from_size(viewport)
    }

    /// Size `root` wants with no constraints, e.g. to pick a viewport for it.
    pub fn natural_size<W: Widget + ?Sized>(&self, root: &W) -> Vec2 {
        let ctx = LayoutCtx { fonts: &self.font_system };
        root.measure(Constraints::unbounded(), &ctx)
    }

    /// Lay out and paint `root` for this frame.
    ///
    /// Any redraw the root requested before this call is satisfied by it.
    /// The returned list is owned by the scene and valid until the next call.
    pub fn frame<W: Widget + ?Sized>(&mut self, root: &mut W, viewport: Vec2) -> &mut DrawList {
        self.draw_list.clear();

        // ── layout ────────────────────────────────────────────────────────
        let rect = self.layout(root, viewport);

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(&mut self.draw_list, &self.font_system);
            root.paint(&mut painter, rect);
        }
        let _ = root.take_redraw_request();
        log::trace!("frame recorded {} draw items", self.draw_list.len());

        &mut self.draw_list
    }

    /// Returns `true` if `root` asked to be redrawn since its last frame.
    pub fn needs_redraw<W: Widget + ?Sized>(&self, root: &mut W) -> bool {
        root.take_redraw_request()
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every size change it is told about.
    #[derive(Default)]
    struct Recorder {
        size: Vec2,
        resizes: Vec<(Vec2, Vec2)>,
        dirty: bool,
    }

    impl Widget for Recorder {
        fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            constraints.constrain(Vec2::new(40.0, 12.0))
        }

        fn paint(&self, _painter: &mut Painter, _rect: Rect) {}

        fn size(&self) -> Vec2 {
            self.size
        }

        fn on_size_changed(&mut self, new_size: Vec2, old_size: Vec2) {
            self.size = new_size;
            self.resizes.push((new_size, old_size));
        }

        fn take_redraw_request(&mut self) -> bool {
            std::mem::take(&mut self.dirty)
        }
    }

    #[test]
    fn size_change_is_reported_once_per_new_viewport() {
        let mut scene = UiScene::new();
        let mut widget = Recorder::default();

        let _ = scene.frame(&mut widget, Vec2::new(100.0, 50.0));
        let _ = scene.frame(&mut widget, Vec2::new(100.0, 50.0));
        let _ = scene.frame(&mut widget, Vec2::new(80.0, 50.0));

        assert_eq!(
            widget.resizes,
            vec![
                (Vec2::new(100.0, 50.0), Vec2::zero()),
                (Vec2::new(80.0, 50.0), Vec2::new(100.0, 50.0)),
            ]
        );
    }

    #[test]
    fn each_root_gets_its_own_first_size_change() {
        let mut scene = UiScene::new();
        let mut a = Recorder::default();
        let mut b = Recorder::default();
        let viewport = Vec2::new(100.0, 50.0);

        let _ = scene.frame(&mut a, viewport);
        let _ = scene.frame(&mut b, viewport);
        let _ = scene.frame(&mut a, viewport);

        assert_eq!(a.resizes, vec![(viewport, Vec2::zero())]);
        assert_eq!(b.resizes, vec![(viewport, Vec2::zero())]);
        assert_eq!(b.size(), viewport);
    }

    #[test]
    fn natural_size_is_unconstrained_measure() {
        let scene = UiScene::new();
        let widget = Recorder::default();
        assert_eq!(scene.natural_size(&widget), Vec2::new(40.0, 12.0));
        assert!(widget.resizes.is_empty());
    }

    #[test]
    fn zero_viewport_on_first_frame_is_not_a_change() {
        let mut scene = UiScene::new();
        let mut widget = Recorder::default();
        let _ = scene.frame(&mut widget, Vec2::zero());
        assert!(widget.resizes.is_empty());
    }

    #[test]
    fn frame_satisfies_pending_redraw() {
        let mut scene = UiScene::new();
        let mut widget = Recorder { dirty: true, ..Recorder::default() };
        let _ = scene.frame(&mut widget, Vec2::new(10.0, 10.0));
        assert!(!scene.needs_redraw(&mut widget));
    }

    #[test]
    fn needs_redraw_drains_the_request() {
        let scene = UiScene::new();
        let mut widget = Recorder { dirty: true, ..Recorder::default() };
        assert!(scene.needs_redraw(&mut widget));
        assert!(!scene.needs_redraw(&mut widget));
    }
}
