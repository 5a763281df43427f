//! Display geometry and configuration builder

use crate::command::{MAX_BIAS, MAX_CONTRAST};

/// Display width in pixels (addressable columns 0-83)
pub const WIDTH: u8 = 84;

/// Display height in pixels
pub const HEIGHT: u8 = 48;

/// Height of one RAM page (bank) in pixel rows
pub const PAGE_HEIGHT: u8 = 8;

/// Number of RAM pages (banks)
pub const PAGES: u8 = HEIGHT / PAGE_HEIGHT;

/// Framebuffer size in bytes (one bit per pixel)
pub const BUFFER_SIZE: usize = WIDTH as usize * HEIGHT as usize / 8;

/// Default contrast (operating voltage) programmed at init
pub const DEFAULT_CONTRAST: u8 = 50;

/// Default bias level programmed at init
pub const DEFAULT_BIAS: u8 = 4;

/// Display configuration
///
/// Holds the mode bits programmed by [`Display::init`](crate::Display::init).
/// Use `Builder` to create a Config, or `Config::default()` for the
/// common module defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Contrast, 0-127
    pub contrast: u8,
    /// Bias level, 0-7
    pub bias: u8,
    /// Whether the display starts in inverse video mode
    pub inverted: bool,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing display configuration
///
/// Out-of-range values are clamped to the highest value the controller accepts.
///
/// # Example
///
/// ```
/// use pcd8544::Builder;
///
/// let config = Builder::new().contrast(60).bias(3).build();
/// assert_eq!(config.contrast, 60);
///
/// // Clamped, not rejected
/// let config = Builder::new().contrast(200).build();
/// assert_eq!(config.contrast, 127);
/// ```
#[must_use]
pub struct Builder {
    /// Contrast (operating voltage)
    contrast: u8,
    /// Bias level
    bias: u8,
    /// Inverse video mode
    inverted: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            contrast: DEFAULT_CONTRAST,
            bias: DEFAULT_BIAS,
            // Normal polarity: set bits are dark pixels
            inverted: false,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set contrast (clamped to 0-127)
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value.min(MAX_CONTRAST);
        self
    }

    /// Set bias level (clamped to 0-7)
    pub fn bias(mut self, value: u8) -> Self {
        self.bias = value.min(MAX_BIAS);
        self
    }

    /// Set whether the display starts inverted
    pub fn inverted(mut self, value: bool) -> Self {
        self.inverted = value;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            contrast: self.contrast,
            bias: self.bias,
            inverted: self.inverted,
        }
    }
}
