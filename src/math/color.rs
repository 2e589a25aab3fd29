use serde::Serialize;

/// An sRGB color with 8-bit channels and a straight (non-premultiplied) alpha.
///
/// Values are immutable; every operation returns a new `Color`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Always within 0.0-1.0.
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build a color with an explicit alpha. Non-finite alpha is treated as opaque.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        let a = if a.is_finite() { a.clamp(0.0, 1.0) } else { 1.0 };
        Self { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Uppercase `#RRGGBB`; alpha is not encoded.
    pub fn to_hex(&self) -> String {
        super::hex::format_hex_rgb(self.r, self.g, self.b)
    }

    /// Linear per-channel blend from `self` toward `other` by `t` (0 = self, 1 = other).
    /// The result is always opaque.
    pub fn mix(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| -> u8 {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color::rgb(lerp(self.r, other.r), lerp(self.g, other.g), lerp(self.b, other.b))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
