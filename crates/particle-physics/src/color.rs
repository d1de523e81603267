//! Colors as the demos see them: sRGB-encoded RGBA in `[0, 1]`

use bytemuck::{Pod, Zeroable};

/// sRGB-encoded RGBA color with components in `[0, 1]`
///
/// Components stay in the encoding a 2D canvas uses; call [`Color::to_linear`]
/// before handing them to an sRGB render target.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb8(255, 255, 255);
    pub const RED: Color = Color::rgb8(255, 0, 0);
    pub const BLUE: Color = Color::rgb8(0, 0, 255);
    pub const YELLOW: Color = Color::rgb8(255, 255, 0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit sRGB channels
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Parse `#RRGGBB` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Convert the color channels to linear light, alpha untouched
    pub fn to_linear(self) -> Self {
        fn decode(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        Self::new(decode(self.r), decode(self.g), decode(self.b), self.a)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// The five colors every demo picks from
pub const PALETTE: [Color; 5] = [
    Color::rgb8(0x08, 0x20, 0x40),
    Color::rgb8(0x07, 0xF2, 0xF2),
    Color::rgb8(0xD9, 0xB0, 0x36),
    Color::rgb8(0xBF, 0x5B, 0x04),
    Color::rgb8(0x8C, 0x28, 0x04),
];
