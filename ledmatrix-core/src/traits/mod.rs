//! Hardware abstraction traits
//!
//! These traits define the interface between the display engine
//! and the chip driver and font implementations.

pub mod glyph;
pub mod matrix;

pub use glyph::{GlyphSource, GLYPH_COLUMNS};
pub use matrix::MatrixDevice;
