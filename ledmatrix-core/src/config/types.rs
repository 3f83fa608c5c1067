//! Configuration type definitions

use heapless::String;

use crate::framebuffer::MAX_DEVICES;
use crate::text::{TextAlignment, DEFAULT_CHAR_WIDTH, MAX_TEXT_LEN};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Widest accepted glyph pitch in columns
pub const MAX_CHAR_WIDTH: u8 = 16;

/// Highest MAX7219 intensity level
pub const MAX_INTENSITY: u8 = 15;

/// Maximum config text length in bytes
///
/// Four bytes per character covers any UTF-8 text of `MAX_TEXT_LEN` chars.
pub const MAX_CONFIG_TEXT: usize = MAX_TEXT_LEN * 4;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Device count is 0 or above `MAX_DEVICES`
    InvalidDeviceCount,
    /// Char width is 0 or above `MAX_CHAR_WIDTH`
    InvalidCharWidth,
    /// Intensity above 15
    InvalidIntensity,
    /// Text longer than `MAX_TEXT_LEN` characters
    TextTooLong,
    /// Frame interval of 0 ms
    InvalidFrameInterval,
}

/// Per-frame animation applied by `LedMatrix::tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScrollMode {
    /// Cursor stays put
    Static,
    /// Scroll left, swapping in staged text at the end of each cycle
    #[default]
    Left,
    /// Scroll right
    Right,
    /// Bounce between the two ends of the text
    Oscillate,
}

/// Matrix configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatrixConfig {
    /// Number of chained 8x8 modules
    pub devices: u8,
    /// Columns per glyph including spacing
    pub char_width: u8,
    /// Text alignment
    pub alignment: TextAlignment,
    /// Render glyphs rotated by 90 degrees
    pub rotate: bool,
    /// Brightness (0-15)
    pub intensity: u8,
    /// Animation per frame
    pub scroll: ScrollMode,
    /// Frame interval in milliseconds
    pub frame_ms: u16,
    /// Initial text
    pub text: String<MAX_CONFIG_TEXT>,
    /// Text swapped in after the first left-scroll cycle
    pub next_text: Option<String<MAX_CONFIG_TEXT>>,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            devices: 4,
            char_width: DEFAULT_CHAR_WIDTH,
            alignment: TextAlignment::Left,
            rotate: false,
            intensity: 0,
            scroll: ScrollMode::Left,
            frame_ms: 50,
            text: String::new(),
            next_text: None,
        }
    }
}

impl MatrixConfig {
    /// Number of display columns
    pub fn display_columns(&self) -> usize {
        self.devices as usize * 8
    }

    /// Check all values are in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.devices == 0 || self.devices as usize > MAX_DEVICES {
            return Err(ConfigError::InvalidDeviceCount);
        }
        if self.char_width == 0 || self.char_width > MAX_CHAR_WIDTH {
            return Err(ConfigError::InvalidCharWidth);
        }
        if self.intensity > MAX_INTENSITY {
            return Err(ConfigError::InvalidIntensity);
        }
        if self.frame_ms == 0 {
            return Err(ConfigError::InvalidFrameInterval);
        }

        let too_long = |s: &str| s.chars().count() > MAX_TEXT_LEN;
        if too_long(self.text.as_str()) || self.next_text.as_deref().is_some_and(too_long) {
            return Err(ConfigError::TextTooLong);
        }

        Ok(())
    }
}
