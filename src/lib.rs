//! PCD8544 LCD Driver
//!
//! A framebuffer driver for the 84x48 monochrome PCD8544 LCD controller
//! (Nokia 5110/3310 modules) with dirty-region flushing.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - In-memory framebuffer; only the rectangle touched since the last
//!   update is sent over SPI
//! - Contrast, bias and inverse video control
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use pcd8544::{Builder, Color, Display, Interface};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst);
//! let config = Builder::new().contrast(60).bias(4).build();
//!
//! let mut display = Display::new(interface, config);
//! if display.init(&mut delay).is_err() {
//!     return;
//! }
//!
//! display.set_pixel(0, 0, Color::Black);
//! let _ = display.update();
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Color type for the monochrome LCD
pub mod color;
/// PCD8544 command definitions
pub mod command;
/// Display geometry and configuration builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// In-memory copy of the display RAM
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Dirty region tracking
pub mod region;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Color;
pub use config::{BUFFER_SIZE, Builder, Config, HEIGHT, PAGE_HEIGHT, PAGES, WIDTH};
pub use display::Display;
pub use error::Error;
pub use framebuffer::Framebuffer;
pub use interface::InterfaceError;
pub use interface::{DEFAULT_RESET_HOLD_MS, DisplayInterface, Interface};
pub use region::{DirtyRegion, Region};
