//! Color type

use serde::{Deserialize, Serialize};

/// RGBA color with sRGB-encoded channels in `0.0..=1.0`
///
/// `from_hex` and `to_hex` scale by 255 without any transfer-function decode.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a `0xRRGGBB` value; bits above 24 are ignored
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Pack into `0xRRGGBB`, dropping alpha
    pub fn to_hex(&self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0x0000ff);
        assert_eq!(c, Color::BLUE);
    }

    #[test]
    fn test_hex_packing() {
        assert_eq!(Color::from_hex(0xff0000).to_hex(), 0xff0000);
        assert_eq!(Color::from_hex(0x12ab7f).to_hex(), 0x12ab7f);
        assert_eq!(Color::from_hex(0xff_123456).to_hex(), 0x123456);
    }

    #[test]
    fn test_to_hex_clamps() {
        let c = Color::rgb(2.0, -1.0, 0.5);
        assert_eq!(c.to_hex(), 0xff0080);
    }
}
