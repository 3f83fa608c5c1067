//! Column framebuffer
//!
//! One byte per display column across the whole chain. Bit 0 of a column
//! byte is the top row, bit 7 the bottom row. Column index is global and
//! device-major: columns `0..8` belong to device 0, `8..16` to device 1,
//! and so on.

use heapless::Vec;

/// Columns (and rows) per 8x8 module
pub const COLUMNS_PER_DEVICE: usize = 8;

/// Maximum number of chained modules
pub const MAX_DEVICES: usize = 32;

/// Maximum framebuffer size in columns
pub const MAX_COLUMNS: usize = MAX_DEVICES * COLUMNS_PER_DEVICE;

/// Fixed-size monochrome column buffer
///
/// The length is set once at construction and never changes. All writes
/// are bounds-checked; out-of-range writes are silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    columns: Vec<u8, MAX_COLUMNS>,
}

impl Framebuffer {
    /// Create a blank framebuffer for `devices` chained modules
    ///
    /// The device count is clamped to `1..=MAX_DEVICES`.
    pub fn new(devices: usize) -> Self {
        let devices = devices.clamp(1, MAX_DEVICES);
        let mut columns = Vec::new();
        // Cannot fail: length is at most MAX_COLUMNS
        let _ = columns.resize(devices * COLUMNS_PER_DEVICE, 0);
        Self { columns }
    }

    /// Number of modules this buffer covers
    pub fn device_count(&self) -> usize {
        self.columns.len() / COLUMNS_PER_DEVICE
    }

    /// Total number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false; a framebuffer covers at least one module
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Zero every column
    pub fn clear(&mut self) {
        self.columns.fill(0);
    }

    /// Overwrite a column byte
    ///
    /// Columns outside the buffer are ignored.
    pub fn set_column(&mut self, col: i32, value: u8) {
        if let Some(slot) = self.slot_mut(col) {
            *slot = value;
        }
    }

    /// Set (never clear) a single pixel
    ///
    /// `row` is 0-7 with 0 at the top. Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, col: i32, row: u8) {
        if row as usize >= COLUMNS_PER_DEVICE {
            return;
        }
        if let Some(slot) = self.slot_mut(col) {
            *slot |= 1 << row;
        }
    }

    /// Read a column byte
    pub fn column(&self, col: usize) -> Option<u8> {
        self.columns.get(col).copied()
    }

    /// Check whether a pixel is lit
    pub fn pixel(&self, col: usize, row: u8) -> bool {
        row < 8 && self.column(col).is_some_and(|c| c & (1 << row) != 0)
    }

    /// The row byte of one module: column `row` of device `device`
    ///
    /// This is the value written to row register `row + 1` of that device.
    pub fn device_row(&self, device: usize, row: usize) -> u8 {
        self.column(device * COLUMNS_PER_DEVICE + row).unwrap_or(0)
    }

    /// All columns as a slice
    pub fn as_slice(&self) -> &[u8] {
        &self.columns
    }

    fn slot_mut(&mut self, col: i32) -> Option<&mut u8> {
        usize::try_from(col)
            .ok()
            .and_then(|col| self.columns.get_mut(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_is_blank() {
        let fb = Framebuffer::new(4);
        assert_eq!(fb.len(), 32);
        assert_eq!(fb.device_count(), 4);
        assert!(fb.as_slice().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_device_count_clamped() {
        assert_eq!(Framebuffer::new(0).device_count(), 1);
        assert_eq!(Framebuffer::new(100).device_count(), MAX_DEVICES);
    }

    #[test]
    fn test_set_column_and_clear() {
        let mut fb = Framebuffer::new(2);
        fb.set_column(3, 0xA5);
        fb.set_column(15, 0xFF);
        assert_eq!(fb.column(3), Some(0xA5));
        assert_eq!(fb.column(15), Some(0xFF));

        fb.clear();
        assert!(fb.as_slice().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_set_pixel_only_sets() {
        let mut fb = Framebuffer::new(1);
        fb.set_column(2, 0b0000_0001);
        fb.set_pixel(2, 7);
        fb.set_pixel(2, 7);
        assert_eq!(fb.column(2), Some(0b1000_0001));
        assert!(fb.pixel(2, 0));
        assert!(fb.pixel(2, 7));
        assert!(!fb.pixel(2, 3));
    }

    #[test]
    fn test_set_pixel_out_of_range_ignored() {
        let mut fb = Framebuffer::new(1);
        fb.set_pixel(-1, 0);
        fb.set_pixel(8, 0);
        fb.set_pixel(0, 8);
        assert!(fb.as_slice().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_device_row() {
        let mut fb = Framebuffer::new(2);
        fb.set_column(8 + 5, 0x3C);
        assert_eq!(fb.device_row(1, 5), 0x3C);
        assert_eq!(fb.device_row(0, 5), 0);
        assert_eq!(fb.device_row(2, 0), 0);
    }

    proptest! {
        #[test]
        fn prop_out_of_range_column_is_noop(
            devices in 1usize..=MAX_DEVICES,
            col in prop_oneof![i32::MIN..0, 256i32..i32::MAX],
            value: u8,
        ) {
            let mut fb = Framebuffer::new(devices);
            fb.set_column(0, 0x11);
            let before = fb.clone();
            fb.set_column(col, value);
            fb.set_pixel(col, 0);
            prop_assert_eq!(fb, before);
        }

        #[test]
        fn prop_clear_zeroes_everything(
            devices in 1usize..=8,
            writes in proptest::collection::vec((0i32..64, any::<u8>()), 0..32),
        ) {
            let mut fb = Framebuffer::new(devices);
            for (col, value) in writes {
                fb.set_column(col, value);
            }
            fb.clear();
            for col in 0..fb.len() {
                prop_assert_eq!(fb.column(col), Some(0));
            }
        }
    }
}
