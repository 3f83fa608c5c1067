//! Matrix device trait
//!
//! The engine renders into its own framebuffer and only hands the finished
//! columns to a device for transmission.

use crate::framebuffer::Framebuffer;

/// Trait for a chain of 8x8 matrix modules
///
/// Implementations own the bus and know how to push a complete framebuffer
/// to every module in the chain.
pub trait MatrixDevice {
    /// Error type for bus operations
    type Error;

    /// Number of chained 8x8 modules
    ///
    /// Must stay constant for the lifetime of the device; the engine sizes
    /// its framebuffer from it once. The engine clamps the count to
    /// `1..=MAX_DEVICES`, so a device reporting more than
    /// [`MAX_DEVICES`](crate::framebuffer::MAX_DEVICES) gets only that many
    /// modules drawn and a device reporting zero still gets one.
    fn device_count(&self) -> usize;

    /// Transmit the framebuffer to the chain
    ///
    /// `framebuffer` holds `device_count() * 8` columns, device-major.
    fn commit(&mut self, framebuffer: &Framebuffer) -> Result<(), Self::Error>;

    /// Set the brightness of every module (0-15)
    fn set_intensity(&mut self, level: u8) -> Result<(), Self::Error>;
}
