//! Paint model shared between UI and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, gradients)
//! - text paints (fill / stroke descriptors handed to text draws)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
pub mod text_paint;

pub use color::{Color, ColorParseError};
pub use gradient::{ColorStop, LinearGradient, SpreadMode};
pub use text_paint::{PaintStyle, TextPaint};

use crate::coords::Vec2;

/// Paint source for filling geometry.
///
/// Extend by adding variants (`RadialGradient`, `Image`, …) while keeping
/// `sample` total so rasterizers never need a fallback path.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    /// Color of this paint at `p` (logical pixels, paint space).
    #[inline]
    pub fn sample(&self, p: Vec2) -> Color {
        match self {
            Paint::Solid(c) => *c,
            Paint::LinearGradient(g) => g.sample(p),
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<LinearGradient> for Paint {
    fn from(g: LinearGradient) -> Self {
        Paint::LinearGradient(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_samples_same_color_everywhere() {
        let p = Paint::from(Color::WHITE);
        assert_eq!(p.sample(Vec2::new(-5.0, 9.0)), Color::WHITE);
    }

    #[test]
    fn gradient_paint_delegates_to_gradient() {
        let p = Paint::from(LinearGradient::horizontal(10.0, &[Color::BLACK, Color::WHITE]));
        assert_eq!(p.sample(Vec2::new(10.0, 0.0)), Color::WHITE);
    }
}
