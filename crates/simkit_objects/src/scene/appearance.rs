//! Object appearance

use simkit_core::Color;

/// Rendered surface of an object
///
/// The color is only reachable through the owning object's narrow mutation
/// API; renderers get a shared reference.
#[derive(Clone, Debug, PartialEq)]
pub struct Appearance {
    color: Color,
    /// Roughness factor handed to the standard material (0 = mirror, 1 = rough)
    pub roughness: f32,
    /// Metalness factor handed to the standard material
    pub metalness: f32,
}

impl Default for Appearance {
    fn default() -> Self {
        Self::with_color(Color::WHITE)
    }
}

impl Appearance {
    /// Create with color
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            roughness: 1.0,
            metalness: 0.0,
        }
    }

    /// Create from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        Self::with_color(Color::from_hex(hex))
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Color packed as `0xRRGGBB`
    pub fn color_hex(&self) -> u32 {
        self.color.to_hex()
    }

    pub(crate) fn set_color_hex(&mut self, hex: u32) {
        self.color = Color::from_hex(hex);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let mut a = Appearance::from_hex(0x0000ff);
        assert_eq!(a.color(), Color::BLUE);
        a.set_color_hex(0xff0000);
        assert_eq!(a.color_hex(), 0xff0000);
    }
}
