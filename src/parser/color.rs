//! ANSI 256-color model
//!
//! A `Color` is a palette index. The palette splits into four ranges:
//! - 0-7: dim (standard) colors
//! - 8-15: bright colors
//! - 16-231: 6x6x6 color cube
//! - 232-255: grayscale ramp
//!
//! `Color::rgba` converts an index to a fixed RGB value without consulting
//! any theme.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An 8-bit RGBA value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create an opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// A palette index (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8);

impl Color {
    pub const BLACK: Color = Color(0);
    pub const RED: Color = Color(1);
    pub const GREEN: Color = Color(2);
    pub const YELLOW: Color = Color(3);
    pub const BLUE: Color = Color(4);
    pub const MAGENTA: Color = Color(5);
    pub const CYAN: Color = Color(6);
    pub const WHITE: Color = Color(7);
    pub const BRIGHT_BLACK: Color = Color(8);
    pub const BRIGHT_RED: Color = Color(9);
    pub const BRIGHT_GREEN: Color = Color(10);
    pub const BRIGHT_YELLOW: Color = Color(11);
    pub const BRIGHT_BLUE: Color = Color(12);
    pub const BRIGHT_MAGENTA: Color = Color(13);
    pub const BRIGHT_CYAN: Color = Color(14);
    pub const BRIGHT_WHITE: Color = Color(15);

    /// 0-7
    pub fn is_dim(self) -> bool {
        self.0 < 8
    }

    /// 8-15
    pub fn is_bright(self) -> bool {
        (8..16).contains(&self.0)
    }

    /// One of the 16 named colors
    pub fn is_16(self) -> bool {
        self.is_dim() || self.is_bright()
    }

    /// 16-231
    pub fn is_cube(self) -> bool {
        (16..232).contains(&self.0)
    }

    /// 232-255
    pub fn is_grayscale(self) -> bool {
        self.0 >= 232
    }

    /// Convert to RGBA. Alpha is always 255.
    pub fn rgba(self) -> Rgba {
        if self.is_16() {
            let channel = |bit: u8| -> u8 {
                let value = if self.0 & bit != 0 { 0xFF } else { 0x00 };
                if self.is_dim() {
                    value >> 1
                } else {
                    value
                }
            };
            Rgba::opaque(channel(0b001), channel(0b010), channel(0b100))
        } else if self.is_cube() {
            let index = u32::from(self.0 - 16);
            let scale = |level: u32| (level * 255 / 5) as u8;
            Rgba::opaque(
                scale(index / 36 % 6),
                scale(index / 6 % 6),
                scale(index % 6),
            )
        } else {
            let value = (u32::from(self.0 - 232) * 255 / 23) as u8;
            Rgba::opaque(value, value, value)
        }
    }
}

impl From<u8> for Color {
    fn from(index: u8) -> Self {
        Color(index)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        color.rgba()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::BLACK.rgba(), Rgba::opaque(0, 0, 0));
        assert_eq!(Color::RED.rgba(), Rgba::opaque(127, 0, 0));
        assert_eq!(Color::WHITE.rgba(), Rgba::opaque(127, 127, 127));
        assert_eq!(Color::BRIGHT_BLUE.rgba(), Rgba::opaque(0, 0, 255));
        assert_eq!(Color::BRIGHT_WHITE.rgba(), Rgba::opaque(255, 255, 255));
    }

    #[test]
    fn test_color_cube() {
        // 196 = 16 + 5*36: full red, no green or blue
        assert_eq!(Color(196).rgba(), Rgba::opaque(255, 0, 0));
        assert_eq!(Color(16).rgba(), Rgba::opaque(0, 0, 0));
        assert_eq!(Color(231).rgba(), Rgba::opaque(255, 255, 255));
        // 16 + 1*36 + 2*6 + 3
        assert_eq!(Color(67).rgba(), Rgba::opaque(51, 102, 153));
    }

    #[test]
    fn test_grayscale() {
        assert_eq!(Color(232).rgba(), Rgba::opaque(0, 0, 0));
        assert_eq!(Color(255).rgba(), Rgba::opaque(255, 255, 255));
        assert_eq!(Color(243).rgba(), Rgba::opaque(121, 121, 121));
    }

    #[test]
    fn test_ranges_are_disjoint() {
        for i in 0..=255u8 {
            let color = Color(i);
            let hits = [color.is_16(), color.is_cube(), color.is_grayscale()]
                .iter()
                .filter(|&&hit| hit)
                .count();
            assert_eq!(hits, 1, "index {}", i);
            assert_eq!(color.rgba().a, 255);
        }
    }
}
