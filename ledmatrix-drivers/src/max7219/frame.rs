//! Register map and frame encoding

use heapless::Vec;
use ledmatrix_core::{Framebuffer, MAX_DEVICES};

/// MAX7219 register addresses
pub mod reg {
    /// No operation (passes through to the next module)
    pub const NOOP: u8 = 0x00;
    /// Row 0 data; rows 1-7 follow at 0x02-0x08
    pub const DIGIT0: u8 = 0x01;
    /// Row 7 data
    pub const DIGIT7: u8 = 0x08;
    /// BCD decode per digit (0 = raw matrix)
    pub const DECODE_MODE: u8 = 0x09;
    /// Brightness, 0-15
    pub const INTENSITY: u8 = 0x0A;
    /// Number of scanned rows minus one
    pub const SCAN_LIMIT: u8 = 0x0B;
    /// 0 = shutdown, 1 = normal operation
    pub const SHUTDOWN: u8 = 0x0C;
    /// 1 = all LEDs on
    pub const DISPLAY_TEST: u8 = 0x0F;

    /// Row data register for `row` (0-7)
    pub const fn digit(row: u8) -> u8 {
        DIGIT0 + row
    }
}

/// Bytes per module word
const WORD_BYTES: usize = 2;

/// Largest frame (one word per module)
pub const FRAME_BYTES: usize = MAX_DEVICES * WORD_BYTES;

/// One CS-framed transfer, ready to shift out
pub type Frame = Vec<u8, FRAME_BYTES>;

/// Encode a register write as the two bytes of a 16-bit word, high byte first
pub const fn encode_word(register: u8, value: u8) -> [u8; WORD_BYTES] {
    let word = (register as u16) << 8 | value as u16;
    word.to_be_bytes()
}

/// Build a frame that writes `register` on module `device` only
///
/// Every other module receives a zero word (NOOP). Returns `None` if
/// `device` is not in the chain.
pub fn register_frame(devices: usize, device: usize, register: u8, value: u8) -> Option<Frame> {
    if device >= devices || devices > MAX_DEVICES {
        return None;
    }

    let mut frame = Frame::new();
    // Cannot fail: devices <= MAX_DEVICES
    let _ = frame.resize(devices * WORD_BYTES, 0);
    let slot = device * WORD_BYTES;
    frame[slot..slot + WORD_BYTES].copy_from_slice(&encode_word(register, value));
    Some(frame)
}

/// Build the frame carrying row `row` (0-7) to every module
///
/// Module `i` gets `(row + 1) << 8 | framebuffer[i * 8 + row]`.
pub fn row_frame(framebuffer: &Framebuffer, row: u8) -> Frame {
    let mut frame = Frame::new();
    for device in 0..framebuffer.device_count() {
        let word = encode_word(reg::digit(row), framebuffer.device_row(device, row as usize));
        // Cannot fail: device_count <= MAX_DEVICES
        let _ = frame.extend_from_slice(&word);
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_word() {
        assert_eq!(encode_word(reg::INTENSITY, 0x07), [0x0A, 0x07]);
        assert_eq!(encode_word(reg::digit(7), 0xFF), [0x08, 0xFF]);
    }

    #[test]
    fn test_register_frame_targets_one_device() {
        let frame = register_frame(4, 2, reg::SHUTDOWN, 1).unwrap();
        assert_eq!(frame.as_slice(), &[0, 0, 0, 0, 0x0C, 0x01, 0, 0]);
    }

    #[test]
    fn test_register_frame_single_device() {
        let frame = register_frame(1, 0, reg::SCAN_LIMIT, 7).unwrap();
        assert_eq!(frame.as_slice(), &[0x0B, 0x07]);
    }

    #[test]
    fn test_register_frame_rejects_bad_device() {
        assert!(register_frame(4, 4, reg::SHUTDOWN, 1).is_none());
        assert!(register_frame(MAX_DEVICES + 1, 0, reg::SHUTDOWN, 1).is_none());
    }

    #[test]
    fn test_row_frame() {
        let mut fb = Framebuffer::new(3);
        fb.set_column(2, 0xAA); // device 0, row 2
        fb.set_column(8 + 2, 0xBB); // device 1, row 2
        fb.set_column(16 + 5, 0xCC); // device 2, row 5

        let frame = row_frame(&fb, 2);
        assert_eq!(frame.as_slice(), &[0x03, 0xAA, 0x03, 0xBB, 0x03, 0x00]);

        let frame = row_frame(&fb, 5);
        assert_eq!(frame.as_slice(), &[0x06, 0x00, 0x06, 0x00, 0x06, 0xCC]);
    }
}
