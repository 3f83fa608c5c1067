//! Board-agnostic core logic for the LED matrix firmware
//!
//! This crate contains everything that does not depend on a specific
//! chip or bus implementation:
//!
//! - Hardware abstraction traits (matrix device, glyph source)
//! - Column framebuffer
//! - Text state (alignment, scroll cursor, oscillation)
//! - Glyph rasterizer with optional 90-degree rotation
//! - Display engine tying the above to a device
//! - Built-in 8x8 font
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

// Host tests (and proptest's assertion macros) need std
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod font;
pub mod framebuffer;
pub mod matrix;
pub mod render;
pub mod text;
pub mod traits;

pub use config::{ConfigError, MatrixConfig, ScrollMode};
pub use font::Font8x8;
pub use framebuffer::{Framebuffer, COLUMNS_PER_DEVICE, MAX_COLUMNS, MAX_DEVICES};
pub use matrix::LedMatrix;
pub use text::{TextAlignment, TextState, MAX_TEXT_LEN};
pub use traits::{GlyphSource, MatrixDevice, GLYPH_COLUMNS};
