//! Color type for the monochrome LCD
//!
//! Each pixel is one bit in the framebuffer. With the display in normal
//! mode a set bit is a dark pixel:
//!
//! | Color | Bit | Fill byte |
//! |-------|-----|-----------|
//! | Black | 1   | 0xFF      |
//! | White | 0   | 0x00      |
//!
//! ## Example
//!
//! ```
//! use pcd8544::Color;
//!
//! assert!(Color::Black.is_set());
//! assert_eq!(Color::White.fill_byte(), 0x00);
//! ```

/// Pixel colors supported by the PCD8544
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Cleared pixel (background)
    #[default]
    White,
    /// Set pixel
    Black,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::Black,
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::White,
        }
    }
}

impl Color {
    /// Whether this color sets the framebuffer bit
    pub fn is_set(self) -> bool {
        self == Self::Black
    }

    /// Byte value filling a whole column of a page with this color
    pub fn fill_byte(self) -> u8 {
        match self {
            Self::Black => 0xFF,
            Self::White => 0x00,
        }
    }

    /// Color stored by a framebuffer bit
    pub fn from_bit(set: bool) -> Self {
        if set { Self::Black } else { Self::White }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_mapping() {
        assert_eq!(Color::from_bit(true), Color::Black);
        assert_eq!(Color::from_bit(false), Color::White);
        assert!(!Color::White.is_set());
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn test_from_binary_color() {
        use embedded_graphics_core::pixelcolor::BinaryColor;
        assert_eq!(Color::from(BinaryColor::On), Color::Black);
        assert_eq!(Color::from(BinaryColor::Off), Color::White);
    }
}
