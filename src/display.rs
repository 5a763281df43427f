//! Core display operations
//!
//! [`Display`] owns the framebuffer and the dirty region. Pixel writes only
//! touch memory; [`Display::update`] sends the pending rectangle one page at
//! a time:
//!
//! ```text
//! for page in min_y/8 ..= max_y/8:
//!     SET_Y_ADDRESS | page
//!     SET_X_ADDRESS | min_x
//!     data: page bytes [min_x ..= max_x]
//!     SET_Y_ADDRESS | 0
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use pcd8544::{Color, Config, Display, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut delay = MockDelay;
//! let interface = Interface::new(MockSpi, MockPin, MockPin);
//! let mut display = Display::new(interface, Config::default());
//! if display.init(&mut delay).is_err() {
//!     return;
//! }
//!
//! display.set_pixel(41, 23, Color::Black);
//! display.set_pixel(42, 23, Color::Black);
//!
//! // Sends two column bytes of page 2
//! let _ = display.update();
//! ```

use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::command;
use crate::config::{BUFFER_SIZE, Config, HEIGHT, WIDTH};
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;
use crate::region::{DirtyRegion, Region};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Framebuffer driver for the PCD8544
///
/// Owns the hardware interface, an 84x48 framebuffer and the region of it
/// that has not reached the display yet.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration applied at init
    config: Config,
    /// Local copy of the display RAM
    framebuffer: Framebuffer,
    /// Pixels changed since the last flush
    dirty: DirtyRegion,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// No bus traffic happens until [`init`](Self::init). The framebuffer
    /// starts white and the whole screen is marked dirty.
    pub fn new(interface: I, config: Config) -> Self {
        let mut dirty = DirtyRegion::new();
        dirty.invalidate();
        Self {
            interface,
            config,
            framebuffer: Framebuffer::new(),
            dirty,
        }
    }

    /// Reset the controller, program the configured modes and push the
    /// whole framebuffer
    ///
    /// Order: hardware reset, bias, contrast, polarity, full-screen flush.
    /// Afterwards the panel matches the framebuffer regardless of its prior
    /// power state.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!(
            "pcd8544 init: contrast={} bias={} inverted={}",
            self.config.contrast,
            self.config.bias,
            self.config.inverted
        );
        self.interface.reset(delay).map_err(Error::Interface)?;

        self.set_bias(self.config.bias)?;
        self.set_contrast(self.config.contrast)?;
        self.set_inverted(self.config.inverted)?;

        self.dirty.invalidate();
        self.update()
    }

    /// Set the contrast (operating voltage)
    ///
    /// Values above 127 are clamped to 127.
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        let contrast = contrast.min(command::MAX_CONTRAST);
        log::debug!("pcd8544 contrast={}", contrast);
        self.send_extended(command::set_vop(contrast))
    }

    /// Set the bias system level
    ///
    /// Values above 7 are clamped to 7.
    pub fn set_bias(&mut self, bias: u8) -> DisplayResult<I> {
        let bias = bias.min(command::MAX_BIAS);
        log::debug!("pcd8544 bias={}", bias);
        self.send_extended(command::set_bias(bias))
    }

    /// Switch between inverse video (`true`) and normal mode
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        log::debug!("pcd8544 inverted={}", inverted);
        self.send_command(command::display_control(inverted))
    }

    /// Set a pixel in the framebuffer
    ///
    /// Coordinates past the edge are clamped to the last column/row. The
    /// change reaches the display on the next [`update`](Self::update).
    pub fn set_pixel(&mut self, x: u8, y: u8, color: Color) {
        let x = x.min(WIDTH - 1);
        let y = y.min(HEIGHT - 1);
        self.framebuffer.set(x, y, color);
        self.dirty.mark(x, y);
    }

    /// Read a pixel back from the framebuffer
    ///
    /// Returns `None` for coordinates off the screen.
    pub fn pixel(&self, x: u8, y: u8) -> Option<Color> {
        self.framebuffer.get(x, y)
    }

    /// Set every pixel to `color` and mark the whole screen dirty
    pub fn fill(&mut self, color: Color) {
        self.framebuffer.fill(color);
        self.dirty.invalidate();
    }

    /// Mark the whole screen dirty without changing the framebuffer
    ///
    /// The next [`update`](Self::update) resends every page.
    pub fn invalidate(&mut self) {
        self.dirty.invalidate();
    }

    /// Send the dirty region to the display
    ///
    /// Does nothing if no pixel changed since the last successful update.
    /// If the transport fails partway, the dirty region is kept so calling
    /// `update` again resends all of it.
    pub fn update(&mut self) -> DisplayResult<I> {
        let Some(region) = self.dirty.pending() else {
            return Ok(());
        };
        log::trace!(
            "pcd8544 update: x {}..={} y {}..={} pages {:?}",
            region.min_x,
            region.max_x,
            region.min_y,
            region.max_y,
            region.pages()
        );

        for page in region.pages() {
            self.send_command(command::set_y_address(page))?;
            self.send_command(command::set_x_address(region.min_x))?;

            let columns = self
                .framebuffer
                .page_columns(page, region.min_x, region.max_x);
            self.interface
                .send_data(columns)
                .map_err(Error::Interface)?;

            // The Y address is a running cursor; rewind it so later
            // addressing that omits Y lands on page 0.
            self.send_command(command::set_y_address(0))?;
        }

        self.dirty.clear();
        Ok(())
    }

    /// Region waiting for the next [`update`](Self::update), if any
    pub fn dirty_region(&self) -> Option<Region> {
        self.dirty.pending()
    }

    /// Raw framebuffer in controller RAM layout
    pub fn buffer(&self) -> &[u8; BUFFER_SIZE] {
        self.framebuffer.as_bytes()
    }

    /// Access the configuration applied at init
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the hardware interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Run one extended-set instruction and return to the basic set
    fn send_extended(&mut self, instruction: u8) -> DisplayResult<I> {
        self.send_command(command::function_set(true))?;
        self.send_command(instruction)?;
        self.send_command(command::function_set(false))
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }
}
