//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the PCD8544 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The PCD8544 requires:
//! - SPI bus (MOSI + SCK), write only
//! - Chip select (SCE, active low), owned by the [`SpiDevice`] so it is
//!   asserted around every transfer and idle in between
//! - 2 GPIO pins:
//!   - **DC**: Data/Command select (output, low=command, high=data)
//!   - **RST**: Reset (output, active low)
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use pcd8544::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! // Create interface with SPI and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//!
//! // Pulse the reset line
//! let _ = interface.reset(&mut delay);
//!
//! // Send command
//! let _ = interface.send_command(0x0C); // Normal display mode
//!
//! // Send data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for hardware interface to the PCD8544 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits, or with a
/// software model of the bus in tests.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., bit-banged SPI, a shared bus with manual chip
/// select), implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Assert chip select, send the command byte, deassert chip select
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode)
    /// 2. Assert chip select, send all bytes contiguously, deassert chip select
    ///
    /// # Arguments
    ///
    /// * `data` - Slice of bytes to send
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST pin low
    /// 2. Hold it low for the reset settle time
    /// 3. Set RST pin high
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay implementation for timing
    ///
    /// # Errors
    ///
    /// Returns an error if driving the reset pin fails.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error (including bus timeouts reported by the HAL)
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Default time the reset line is held low, in milliseconds
pub const DEFAULT_RESET_HOLD_MS: u32 = 500;

/// Hardware interface implementation for the PCD8544
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`] (manages chip select)
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
///
/// ## Example
///
/// ```rust,no_run
/// use pcd8544::{Config, Display, Interface};
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::OutputPin;
/// # use embedded_hal::spi::{Operation, SpiDevice};
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiDevice for MockSpi {
/// #     fn transaction(
/// #         &mut self,
/// #         _operations: &mut [Operation<'_, u8>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// let interface = Interface::new(
///     MockSpi,  // SpiDevice
///     MockPin,  // DC
///     MockPin,  // RST
/// );
///
/// // Use with Display
/// let _display = Display::new(interface, Config::default());
/// ```
pub struct Interface<SPI, DC, RST> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Time the reset line is held low, in milliseconds
    reset_hold_ms: u32,
}

impl<SPI, DC, RST> Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self {
            spi,
            dc,
            rst,
            reset_hold_ms: DEFAULT_RESET_HOLD_MS,
        }
    }

    /// Set how long the reset line is held low, in milliseconds
    ///
    /// Default is 500ms, which is enough for the controller to settle from
    /// any prior power state.
    pub fn set_reset_hold(&mut self, hold_ms: u32) -> &mut Self {
        self.reset_hold_ms = hold_ms;
        self
    }

    /// Get the current reset hold time in milliseconds
    pub fn reset_hold(&self) -> u32 {
        self.reset_hold_ms
    }

    /// Release the SPI device and pins
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(self.reset_hold_ms);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::spi::{ErrorType as SpiErrorType, Operation};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Dc(bool),
        Rst(bool),
        Write(Vec<u8>),
        DelayMs(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    struct MockSpi {
        log: Log,
        fail: bool,
    }

    impl SpiErrorType for MockSpi {
        type Error = MockError;
    }

    impl SpiDevice for MockSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            for op in operations.iter() {
                if let Operation::Write(bytes) = op {
                    self.log.borrow_mut().push(Event::Write(bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    struct MockPin {
        log: Log,
        is_dc: bool,
        fail: bool,
    }

    impl ErrorType for MockPin {
        type Error = MockError;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.record(false)
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.record(true)
        }
    }

    impl MockPin {
        fn record(&self, level: bool) -> Result<(), MockError> {
            if self.fail {
                return Err(MockError);
            }
            let event = if self.is_dc {
                Event::Dc(level)
            } else {
                Event::Rst(level)
            };
            self.log.borrow_mut().push(event);
            Ok(())
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::DelayMs(ms));
        }
    }

    fn test_interface(fail_spi: bool) -> (Interface<MockSpi, MockPin, MockPin>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let spi = MockSpi {
            log: log.clone(),
            fail: fail_spi,
        };
        let dc = MockPin {
            log: log.clone(),
            is_dc: true,
            fail: false,
        };
        let rst = MockPin {
            log: log.clone(),
            is_dc: false,
            fail: false,
        };
        (Interface::new(spi, dc, rst), log)
    }

    #[test]
    fn test_default_reset_hold() {
        assert_eq!(DEFAULT_RESET_HOLD_MS, 500);
        let (interface, _) = test_interface(false);
        assert_eq!(interface.reset_hold(), DEFAULT_RESET_HOLD_MS);
    }

    #[test]
    fn test_set_reset_hold() {
        let (mut interface, _) = test_interface(false);
        interface.set_reset_hold(750);
        assert_eq!(interface.reset_hold(), 750);
    }

    #[test]
    fn test_send_command_frames_with_dc_low() {
        let (mut interface, log) = test_interface(false);
        interface.send_command(0x21).unwrap();
        assert_eq!(
            *log.borrow(),
            alloc::vec![Event::Dc(false), Event::Write(alloc::vec![0x21])]
        );
    }

    #[test]
    fn test_send_data_frames_with_dc_high_in_one_transfer() {
        let (mut interface, log) = test_interface(false);
        interface.send_data(&[0x01, 0x02, 0x03]).unwrap();
        assert_eq!(
            *log.borrow(),
            alloc::vec![Event::Dc(true), Event::Write(alloc::vec![0x01, 0x02, 0x03])]
        );
    }

    #[test]
    fn test_reset_sequence() {
        let (mut interface, log) = test_interface(false);
        let mut delay = MockDelay { log: log.clone() };
        interface.reset(&mut delay).unwrap();
        assert_eq!(
            *log.borrow(),
            alloc::vec![Event::Rst(false), Event::DelayMs(500), Event::Rst(true)]
        );
    }

    #[test]
    fn test_spi_error_is_propagated() {
        let (mut interface, _) = test_interface(true);
        let result = interface.send_data(&[0xAA]);
        assert!(matches!(result, Err(InterfaceError::Spi(MockError))));
    }

    #[test]
    fn test_dc_pin_error_stops_before_spi_write() {
        let (mut interface, log) = test_interface(false);
        interface.dc.fail = true;
        let result = interface.send_command(0x21);
        assert!(matches!(result, Err(InterfaceError::Pin(MockError))));
        let result = interface.send_data(&[0x01]);
        assert!(matches!(result, Err(InterfaceError::Pin(MockError))));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_rst_pin_error_skips_hold() {
        let (mut interface, log) = test_interface(false);
        let mut delay = MockDelay { log: log.clone() };
        interface.rst.fail = true;
        let result = interface.reset(&mut delay);
        assert!(matches!(result, Err(InterfaceError::Pin(MockError))));
        assert!(log.borrow().is_empty());
    }
}
