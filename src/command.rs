//! PCD8544 command definitions
//!
//! This module defines the instruction bytes used to control the PCD8544
//! LCD controller. Every instruction is a single byte sent with the DC pin
//! low; parameters are packed into the low bits of the opcode.
//!
//! ## Instruction Sets
//!
//! The controller has two instruction sets, selected by the `H` bit of
//! [`FUNCTION_SET`]:
//!
//! - **Basic** (`H = 0`): display control, RAM X/Y addressing
//! - **Extended** (`H = 1`): operating voltage (contrast), bias system
//!
//! Mode-control sequences therefore look like:
//! 1. `FUNCTION_SET | EXTENDED_INSTRUCTION`
//! 2. The extended instruction with its parameter
//! 3. `FUNCTION_SET` (back to the basic set)
//!
//! ## Example
//!
//! ```rust,no_run
//! use pcd8544::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! // Address page 2, column 10
//! let _ = interface.send_command(command::set_y_address(2));
//! let _ = interface.send_command(command::set_x_address(10));
//!
//! // Write one column byte
//! let _ = interface.send_data(&[0xFF]);
//! ```

// Basic instruction set

/// Function set instruction (0x20)
///
/// Low bits: `PD` (0x04, power down), `V` (0x02, vertical addressing),
/// `H` (0x01, extended instruction set).
pub const FUNCTION_SET: u8 = 0x20;

/// Extended instruction set bit (`H`) of [`FUNCTION_SET`]
pub const EXTENDED_INSTRUCTION: u8 = 0x01;

/// Display control instruction (0x08)
///
/// Combined with [`DISPLAY_NORMAL`] or [`DISPLAY_INVERTED`].
pub const DISPLAY_CONTROL: u8 = 0x08;

/// Normal display mode bits (`D = 1, E = 0`)
pub const DISPLAY_NORMAL: u8 = 0x04;

/// Inverse video mode bits (`D = 1, E = 1`)
pub const DISPLAY_INVERTED: u8 = 0x05;

/// Set Y address of RAM instruction (0x40)
///
/// Low 3 bits select the page (bank), 0-5 for a 48-row panel.
pub const SET_Y_ADDRESS: u8 = 0x40;

/// Set X address of RAM instruction (0x80)
///
/// Low 7 bits select the column, 0-83.
pub const SET_X_ADDRESS: u8 = 0x80;

// Extended instruction set

/// Bias system instruction (0x10, extended set)
///
/// Low 3 bits select the bias level.
pub const SET_BIAS: u8 = 0x10;

/// Set operating voltage instruction (0x80, extended set)
///
/// Low 7 bits select V<sub>OP</sub>, i.e. the contrast.
pub const SET_VOP: u8 = 0x80;

/// Highest contrast value accepted by [`SET_VOP`]
pub const MAX_CONTRAST: u8 = 0x7F;

/// Highest bias value accepted by [`SET_BIAS`]
pub const MAX_BIAS: u8 = 0x07;

/// Function set selecting the extended (`true`) or basic instruction set
pub const fn function_set(extended: bool) -> u8 {
    if extended {
        FUNCTION_SET | EXTENDED_INSTRUCTION
    } else {
        FUNCTION_SET
    }
}

/// Display control selecting inverse video (`true`) or normal mode
pub const fn display_control(inverted: bool) -> u8 {
    if inverted {
        DISPLAY_CONTROL | DISPLAY_INVERTED
    } else {
        DISPLAY_CONTROL | DISPLAY_NORMAL
    }
}

/// Set Y address (page) instruction
pub const fn set_y_address(page: u8) -> u8 {
    SET_Y_ADDRESS | (page & 0x07)
}

/// Set X address (column) instruction
pub const fn set_x_address(column: u8) -> u8 {
    SET_X_ADDRESS | (column & 0x7F)
}

/// Set operating voltage instruction, parameter masked to 7 bits
pub const fn set_vop(contrast: u8) -> u8 {
    SET_VOP | (contrast & MAX_CONTRAST)
}

/// Bias system instruction, parameter masked to 3 bits
pub const fn set_bias(bias: u8) -> u8 {
    SET_BIAS | (bias & MAX_BIAS)
}
