use crate::coords::Vec2;

use super::Color;

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

impl SpreadMode {
    /// Maps an unbounded axis parameter into [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            SpreadMode::Pad => t.clamp(0.0, 1.0),
            SpreadMode::Repeat => t - t.floor(),
            SpreadMode::Reflect => {
                let m = t.rem_euclid(2.0);
                if m > 1.0 { 2.0 - m } else { m }
            }
        }
    }
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not strictly enforced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }

    /// Distributes `colors` uniformly over [0, 1]: stop `i` sits at `i / (n - 1)`.
    ///
    /// A single color yields one stop at `t = 0`.
    pub fn evenly_spaced(colors: &[Color]) -> Vec<ColorStop> {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        colors
            .iter()
            .enumerate()
            .map(|(i, &color)| ColorStop::new(i as f32 / last, color))
            .collect()
    }
}

/// Linear gradient definition in logical pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops define premultiplied linear colors.
/// - `spread` defines out-of-range behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self {
            start,
            end,
            stops,
            spread,
        }
    }

    /// Left-to-right gradient spanning `x ∈ [0, width]`, clamped beyond both ends.
    ///
    /// A `width` of zero produces a degenerate axis; see [`sample`](Self::sample).
    pub fn horizontal(width: f32, colors: &[Color]) -> Self {
        Self::new(
            Vec2::zero(),
            Vec2::new(width, 0.0),
            ColorStop::evenly_spaced(colors),
            SpreadMode::Pad,
        )
    }

    /// Horizontal extent `(x0, x1)` of the gradient axis.
    #[inline]
    pub fn span_x(&self) -> (f32, f32) {
        (self.start.x, self.end.x)
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// Color at `p`, projected onto the `start → end` axis.
    ///
    /// Degenerate inputs never panic: no stops sample transparent, and a
    /// zero-length axis samples the first stop. Stops are assumed sorted by `t`.
    pub fn sample(&self, p: Vec2) -> Color {
        let Some(first) = self.stops.first() else {
            return Color::TRANSPARENT;
        };

        let axis = self.end - self.start;
        let len2 = axis.length_squared();
        if len2 <= f32::EPSILON || !len2.is_finite() {
            return first.color;
        }

        let t = self.spread.apply((p - self.start).dot(axis) / len2);
        self.color_at(t)
    }

    fn color_at(&self, t: f32) -> Color {
        let mut prev = self.stops[0];
        if t <= prev.t {
            return prev.color;
        }
        for &next in &self.stops[1..] {
            if t <= next.t {
                let span = next.t - prev.t;
                if span <= f32::EPSILON {
                    return next.color;
                }
                return prev.color.lerp(next.color, (t - prev.t) / span);
            }
            prev = next;
        }
        prev.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::from_premul(1.0, 0.0, 0.0, 1.0);
    const GREEN: Color = Color::from_premul(0.0, 1.0, 0.0, 1.0);
    const BLUE: Color = Color::from_premul(0.0, 0.0, 1.0, 1.0);

    fn rgb() -> LinearGradient {
        LinearGradient::horizontal(100.0, &[RED, GREEN, BLUE])
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn evenly_spaced_three_stops() {
        let stops = ColorStop::evenly_spaced(&[RED, GREEN, BLUE]);
        let ts: Vec<f32> = stops.iter().map(|s| s.t).collect();
        assert_eq!(ts, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn evenly_spaced_single_color() {
        let stops = ColorStop::evenly_spaced(&[RED]);
        assert_eq!(stops, vec![ColorStop::new(0.0, RED)]);
    }

    #[test]
    fn horizontal_spans_zero_to_width() {
        let g = rgb();
        assert_eq!(g.span_x(), (0.0, 100.0));
        assert_eq!(g.start.y, g.end.y);
        assert_eq!(g.spread, SpreadMode::Pad);
        assert!(g.is_valid());
    }

    #[test]
    fn zero_width_is_structurally_invalid() {
        assert!(!LinearGradient::horizontal(0.0, &[RED, GREEN, BLUE]).is_valid());
    }

    // ── sample ────────────────────────────────────────────────────────────

    #[test]
    fn sample_hits_stops_exactly() {
        let g = rgb();
        assert_eq!(g.sample(Vec2::new(0.0, 0.0)), RED);
        assert_eq!(g.sample(Vec2::new(50.0, 10.0)), GREEN);
        assert_eq!(g.sample(Vec2::new(100.0, -3.0)), BLUE);
    }

    #[test]
    fn sample_interpolates_between_stops() {
        let c = rgb().sample(Vec2::new(25.0, 0.0));
        assert_eq!(c, Color::from_premul(0.5, 0.5, 0.0, 1.0));
    }

    #[test]
    fn sample_pad_clamps_outside_axis() {
        let g = rgb();
        assert_eq!(g.sample(Vec2::new(-40.0, 0.0)), RED);
        assert_eq!(g.sample(Vec2::new(500.0, 0.0)), BLUE);
    }

    #[test]
    fn sample_degenerate_axis_uses_first_stop() {
        let g = LinearGradient::horizontal(0.0, &[RED, GREEN, BLUE]);
        assert_eq!(g.sample(Vec2::new(12.0, 3.0)), RED);
    }

    #[test]
    fn sample_without_stops_is_transparent() {
        let g = LinearGradient::horizontal(10.0, &[]);
        assert_eq!(g.sample(Vec2::new(5.0, 0.0)), Color::TRANSPARENT);
    }

    // ── spread ────────────────────────────────────────────────────────────

    #[test]
    fn spread_modes() {
        assert_eq!(SpreadMode::Pad.apply(1.5), 1.0);
        assert_eq!(SpreadMode::Repeat.apply(1.25), 0.25);
        assert_eq!(SpreadMode::Reflect.apply(1.25), 0.75);
        assert_eq!(SpreadMode::Reflect.apply(-0.25), 0.25);
    }
}
