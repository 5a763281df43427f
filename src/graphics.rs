//! Graphics support via embedded-graphics
//!
//! This module implements the [`DrawTarget`] trait from the
//! embedded-graphics ecosystem directly on [`Display`], so primitives, text
//! and images from `embedded-graphics` render into the framebuffer and the
//! dirty region. Nothing is sent until [`Display::update`].
//!
//! Unlike [`Display::set_pixel`], which clamps out-of-range coordinates,
//! the draw target clips: pixels outside the 84x48 screen are dropped.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     prelude::*,
//!     primitives::{Line, PrimitiveStyle},
//! };
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
//! let _ = display.init(&mut delay);
//!
//! let _ = Line::new(Point::new(0, 0), Point::new(83, 47))
//!     .into_styled(PrimitiveStyle::with_stroke(Color::Black, 1))
//!     .draw(&mut display);
//!
//! let _ = display.update();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::color::Color;
use crate::config::{HEIGHT, WIDTH};
use crate::display::Display;
use crate::interface::DisplayInterface;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || x >= i32::from(WIDTH) || y >= i32::from(HEIGHT) {
                continue;
            }
            self.set_pixel(x as u8, y as u8, color);
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(u32::from(WIDTH), u32::from(HEIGHT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::region::Region;
    use embedded_graphics::{
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };
    use embedded_hal::delay::DelayNs;

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_command(&mut self, _command: u8) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn flushed_display() -> Display<MockInterface> {
        let mut display = Display::new(MockInterface, Config::default());
        display.update().unwrap();
        display
    }

    #[test]
    fn test_size() {
        let display = flushed_display();
        assert_eq!(display.size(), Size::new(84, 48));
    }

    #[test]
    fn test_draw_marks_dirty_region() {
        let mut display = flushed_display();
        Line::new(Point::new(10, 5), Point::new(20, 12))
            .into_styled(PrimitiveStyle::with_stroke(Color::Black, 1))
            .draw(&mut display)
            .unwrap();

        assert_eq!(display.dirty_region(), Some(Region::new(10, 5, 20, 12)));
        assert_eq!(display.pixel(10, 5), Some(Color::Black));
        assert_eq!(display.pixel(20, 12), Some(Color::Black));
    }

    #[test]
    fn test_draw_clips_off_screen_pixels() {
        let mut display = flushed_display();
        Rectangle::new(Point::new(-5, -5), Size::new(200, 200))
            .into_styled(PrimitiveStyle::with_fill(Color::Black))
            .draw(&mut display)
            .unwrap();

        assert_eq!(display.dirty_region(), Some(Region::full_screen()));
        assert!(display.buffer().iter().all(|byte| *byte == 0xFF));
    }

    #[test]
    fn test_pixels_outside_screen_are_dropped() {
        let mut display = flushed_display();
        display
            .draw_iter([
                Pixel(Point::new(-1, 0), Color::Black),
                Pixel(Point::new(84, 0), Color::Black),
                Pixel(Point::new(0, 48), Color::Black),
            ])
            .unwrap();
        assert!(display.dirty_region().is_none());
    }

    #[test]
    fn test_clear_fills_and_invalidates() {
        let mut display = flushed_display();
        DrawTarget::clear(&mut display, Color::Black).unwrap();
        assert_eq!(display.dirty_region(), Some(Region::full_screen()));
        assert!(display.buffer().iter().all(|byte| *byte == 0xFF));
    }
}
