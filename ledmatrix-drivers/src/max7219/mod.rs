//! MAX7219 LED matrix driver
//!
//! The MAX7219 drives one 8x8 LED matrix. Several modules are daisy-chained
//! so that the data output of one feeds the data input of the next; the
//! whole chain behaves as one long shift register.
//!
//! # SPI Protocol
//!
//! - SPI mode 0, MSB first, up to 10 MHz
//! - One 16-bit word per module: register address in the high byte, data
//!   in the low byte
//! - A frame is `CS low`, one word per module, `CS high`; the rising edge
//!   latches every module's word at once
//!
//! Because the chain is a shift register, even a write aimed at one module
//! has to shift a word through every module. The others get a NOOP.

pub mod driver;
pub mod frame;

pub use driver::{Max7219, Max7219Error, RESET_PULSE_MS, SPI_MODE};
pub use frame::{reg, register_frame, row_frame, Frame, FRAME_BYTES};
