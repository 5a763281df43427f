//! Dirty region tracking
//!
//! [`DirtyRegion`] accumulates the bounding rectangle of every pixel written
//! since the last flush. The flush walks the pages that rectangle covers and
//! sends only its columns, so a changed digit or a moving cursor costs a few
//! bytes instead of the whole 504-byte frame.
//!
//! ## Example
//!
//! ```
//! use pcd8544::region::{DirtyRegion, Region};
//!
//! let mut dirty = DirtyRegion::new();
//! assert_eq!(dirty.pending(), None);
//!
//! dirty.mark(10, 7);
//! dirty.mark(12, 8);
//! assert_eq!(dirty.pending(), Some(Region::new(10, 7, 12, 8)));
//!
//! // Rows 7 and 8 straddle a page boundary
//! let pages: Vec<u8> = dirty.pending().unwrap().pages().collect();
//! assert_eq!(pages, [0, 1]);
//! ```

use core::ops::RangeInclusive;

use crate::config::{HEIGHT, PAGE_HEIGHT, WIDTH};

/// Rectangle in pixel coordinates with inclusive bounds
///
/// Always satisfies `min_x <= max_x` and `min_y <= max_y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// Leftmost column
    pub min_x: u8,
    /// Topmost row
    pub min_y: u8,
    /// Rightmost column
    pub max_x: u8,
    /// Bottom row
    pub max_y: u8,
}

impl Region {
    /// Create a region from two corners, ordering the bounds
    #[allow(clippy::many_single_char_names)]
    pub fn new(x0: u8, y0: u8, x1: u8, y1: u8) -> Self {
        Self {
            min_x: x0.min(x1),
            min_y: y0.min(y1),
            max_x: x0.max(x1),
            max_y: y0.max(y1),
        }
    }

    /// Single-pixel region
    pub fn point(x: u8, y: u8) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    /// The whole screen
    pub fn full_screen() -> Self {
        Self {
            min_x: 0,
            min_y: 0,
            max_x: WIDTH - 1,
            max_y: HEIGHT - 1,
        }
    }

    /// Grow the region to include (x, y)
    pub fn include(&mut self, x: u8, y: u8) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Whether (x, y) lies inside the region
    pub fn contains(&self, x: u8, y: u8) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }

    /// Width in columns
    pub fn width(&self) -> u8 {
        self.max_x - self.min_x + 1
    }

    /// Height in rows
    pub fn height(&self) -> u8 {
        self.max_y - self.min_y + 1
    }

    /// RAM pages covered by the region, in ascending order
    pub fn pages(&self) -> RangeInclusive<u8> {
        (self.min_y / PAGE_HEIGHT)..=(self.max_y / PAGE_HEIGHT)
    }
}

/// Bounding box of pixels changed since the last successful flush
///
/// `None` means the display already matches the framebuffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirtyRegion(Option<Region>);

impl DirtyRegion {
    /// Nothing pending
    pub const fn new() -> Self {
        Self(None)
    }

    /// Record a write to (x, y)
    ///
    /// Coordinates past the edge are clamped to the last column/row. With
    /// nothing pending the region collapses to that pixel; otherwise each
    /// bound widens independently. Never shrinks.
    pub fn mark(&mut self, x: u8, y: u8) {
        let x = x.min(WIDTH - 1);
        let y = y.min(HEIGHT - 1);
        match &mut self.0 {
            Some(region) => region.include(x, y),
            None => self.0 = Some(Region::point(x, y)),
        }
    }

    /// Mark the whole screen as pending
    pub fn invalidate(&mut self) {
        self.0 = Some(Region::full_screen());
    }

    /// Region waiting to be flushed, if any
    pub fn pending(&self) -> Option<Region> {
        self.0
    }

    /// Whether a flush has anything to send
    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }

    /// Forget the pending region after a successful flush
    pub fn clear(&mut self) {
        self.0 = None;
    }
}
