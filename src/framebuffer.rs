//! In-memory copy of the display RAM
//!
//! The PCD8544 RAM is organized as 6 horizontal pages of 8 rows. Each page
//! is 84 consecutive bytes, one per column, and bit `b` of a column byte is
//! row `page * 8 + b`:
//!
//! ```text
//! byte index = x + (y / 8) * WIDTH
//! bit        = y % 8
//! ```
//!
//! [`Framebuffer`] mirrors that layout exactly, so any run of columns within
//! one page can be sent to the controller as-is.

use crate::color::Color;
use crate::config::{BUFFER_SIZE, HEIGHT, PAGE_HEIGHT, WIDTH};

/// Fixed-size 1bpp framebuffer in controller RAM layout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framebuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// All-white framebuffer, matching a freshly reset controller
    pub const fn new() -> Self {
        Self {
            bytes: [0; BUFFER_SIZE],
        }
    }

    /// Byte index and bit mask for (x, y), or `None` off-screen
    fn locate(x: u8, y: u8) -> Option<(usize, u8)> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        let index = x as usize + (y / PAGE_HEIGHT) as usize * WIDTH as usize;
        Some((index, 1 << (y % PAGE_HEIGHT)))
    }

    /// Set or clear the bit for (x, y)
    ///
    /// Off-screen coordinates are ignored; callers clamp beforehand.
    pub fn set(&mut self, x: u8, y: u8, color: Color) {
        let Some((index, bit)) = Self::locate(x, y) else {
            return;
        };
        if color.is_set() {
            self.bytes[index] |= bit;
        } else {
            self.bytes[index] &= !bit;
        }
    }

    /// Color stored at (x, y), or `None` off-screen
    pub fn get(&self, x: u8, y: u8) -> Option<Color> {
        let (index, bit) = Self::locate(x, y)?;
        Some(Color::from_bit(self.bytes[index] & bit != 0))
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Color) {
        self.bytes.fill(color.fill_byte());
    }

    /// Column bytes `first..=last` of one page
    ///
    /// Returns an empty slice if the range falls outside the page.
    pub fn page_columns(&self, page: u8, first: u8, last: u8) -> &[u8] {
        if last >= WIDTH || first > last {
            return &[];
        }
        let start = page as usize * WIDTH as usize + first as usize;
        let end = page as usize * WIDTH as usize + last as usize;
        self.bytes.get(start..=end).unwrap_or(&[])
    }

    /// Raw buffer contents
    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }
}
