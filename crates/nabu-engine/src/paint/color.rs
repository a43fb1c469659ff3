use std::fmt;

/// Error returned by [`Color::from_hex`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color parse error: {}", self.0)
    }
}

impl std::error::Error for ColorParseError {}

/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Interpolating premultiplied colors keeps gradients free of dark fringes
/// between stops of different alpha.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_premul(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    ///
    /// ```
    /// use nabu_engine::paint::Color;
    /// let purple = Color::from_hex("#943DFF").unwrap();
    /// assert_eq!(purple.a, 1.0);
    /// ```
    pub fn from_hex(src: &str) -> Result<Self, ColorParseError> {
        let hex = src.trim().strip_prefix('#').unwrap_or(src.trim());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError(format!("`{src}` contains non-hex characters")));
        }
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorParseError(format!(
                "color must be #rrggbb or #rrggbbaa, got {} digits",
                hex.len()
            )));
        }

        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| ColorParseError(e.to_string()))
        };
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, a))
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Linear interpolation in premultiplied space. `t` is clamped to [0, 1].
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── from_hex ──────────────────────────────────────────────────────────

    #[test]
    fn from_hex_rgb_is_opaque() {
        let c = Color::from_hex("#FF0000").unwrap();
        assert_eq!(c, Color::from_premul(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn from_hex_without_hash() {
        assert_eq!(Color::from_hex("ffffff").unwrap(), Color::WHITE);
    }

    #[test]
    fn from_hex_alpha_is_premultiplied() {
        let c = Color::from_hex("#FFFFFF00").unwrap();
        assert_eq!(c, Color::TRANSPARENT);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(Color::from_hex("#FFF").is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        let err = Color::from_hex("#GG0000").unwrap_err();
        assert!(err.to_string().contains("non-hex"));
    }

    // ── lerp ──────────────────────────────────────────────────────────────

    #[test]
    fn lerp_midpoint() {
        let c = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(c, Color::from_premul(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn lerp_clamps_t() {
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 3.0), Color::WHITE);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, -1.0), Color::BLACK);
    }
}
