//! Nabu UI — widget layer on top of `nabu-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use nabu_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let font = scene.load_font(include_bytes!("my_font.ttf"))?;
//!
//! let mut label = StyledLabel::new("Hello!", StyleConfig::default().font(font))
//!     .with_text_size(32.0);
//!
//! // In your frame callback:
//! let draw_list = scene.frame(&mut label, viewport);
//! // Pass draw_list to a renderer, e.g. `nabu_engine::render::rasterize`.
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) and draw through the
//! [`TextSurface`](painter::TextSurface) the painter provides.

pub mod constraints;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything you need to build and host widgets.
pub mod prelude {
    pub use crate::constraints::{Constraints, LayoutCtx};
    pub use crate::painter::{Painter, TextSurface};
    pub use crate::scene::UiScene;
    pub use crate::widget::Widget;
    pub use crate::widgets::styled_label::{
        text_origin, LabelPaints, StyleConfig, StyledLabel, DEFAULT_TEXT_SIZE,
    };

    // Re-export the engine primitives everyone needs.
    pub use nabu_engine::coords::{Rect, Vec2};
    pub use nabu_engine::paint::{Color, ColorStop, LinearGradient, Paint, PaintStyle, SpreadMode, TextPaint};
    pub use nabu_engine::text::{FontId, LineMetrics};
}
