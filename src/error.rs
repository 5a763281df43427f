//! Error types for the driver
//!
//! ## Error Types
//!
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Out-of-range inputs (coordinates, contrast, bias) are clamped rather than
//! reported, so the only runtime failure is the transport itself.
//!
//! ## Example
//!
//! ```
//! use pcd8544::{DisplayInterface, Error};
//! # use embedded_hal::delay::DelayNs;
//! # struct FailingInterface;
//! # impl DisplayInterface for FailingInterface {
//! #     type Error = &'static str;
//! #     fn send_command(&mut self, _command: u8) -> Result<(), Self::Error> { Err("bus timeout") }
//! #     fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> { Err("bus timeout") }
//! #     fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let err: Error<FailingInterface> = Error::Interface("bus timeout");
//! assert!(matches!(err, Error::Interface("bus timeout")));
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    /// The framebuffer and dirty region are left as they were before the failing
    /// call, so the same operation can be retried.
    Interface(I::Error),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use embedded_hal::delay::DelayNs;

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = u8;

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

    #[test]
    fn test_display_includes_interface_error() {
        let err: Error<MockInterface> = Error::Interface(7);
        assert_eq!(err.to_string(), "Interface error: 7");
    }
}
