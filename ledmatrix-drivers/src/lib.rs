//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in ledmatrix-core:
//!
//! - MAX7219 LED matrix chain driver (SPI)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod max7219;

pub use max7219::{Max7219, Max7219Error};
