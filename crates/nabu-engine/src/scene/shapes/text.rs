use crate::coords::Vec2;
use crate::paint::TextPaint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Style, source, font and size of the run.
    pub paint: TextPaint,
    /// Left end of the baseline in logical pixels.
    pub baseline: Vec2,
    /// Where paint space (gradient coordinates) is anchored in the scene,
    /// usually the top-left of the widget that recorded the run.
    pub paint_origin: Vec2,
}

impl DrawList {
    /// Records a single-line text run drawn with `paint`.
    pub fn push_text_run(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        paint: &TextPaint,
        baseline: Vec2,
        paint_origin: Vec2,
    ) {
        self.push(z, DrawCmd::Text(TextCmd {
            text: text.into(),
            paint: paint.clone(),
            baseline,
            paint_origin,
        }));
    }
}
