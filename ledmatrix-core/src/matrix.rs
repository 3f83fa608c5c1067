//! Display engine
//!
//! `LedMatrix` owns the framebuffer, the text state and the font, and
//! drives a `MatrixDevice` for the final transmit. Rendering never fails:
//! anything that falls outside the display is dropped. Only operations that
//! touch the bus return the device error.
//!
//! # Usage
//!
//! ```ignore
//! let mut matrix = LedMatrix::new(max7219, Font8x8);
//! matrix.set_text("Hello");
//!
//! // Every frame:
//! matrix.scroll_text_left();
//! matrix.clear();
//! matrix.draw_text();
//! matrix.commit()?;
//! ```

use crate::config::{MatrixConfig, ScrollMode};
use crate::framebuffer::Framebuffer;
use crate::render::render_glyph;
use crate::text::{TextAlignment, TextState};
use crate::traits::{GlyphSource, MatrixDevice};

/// Framebuffer and text renderer for a chain of 8x8 modules
pub struct LedMatrix<D, F> {
    device: D,
    font: F,
    framebuffer: Framebuffer,
    text: TextState,
    /// Render glyphs rotated by 90 degrees
    rotate: bool,
}

impl<D: MatrixDevice, F: GlyphSource> LedMatrix<D, F> {
    /// Create an engine for `device`, sized from its device count
    ///
    /// The count is clamped to `1..=MAX_DEVICES`; a device reporting more
    /// only has its first `MAX_DEVICES` modules drawn.
    pub fn new(device: D, font: F) -> Self {
        let framebuffer = Framebuffer::new(device.device_count());
        let text = TextState::new(framebuffer.len());
        Self {
            device,
            font,
            framebuffer,
            text,
            rotate: false,
        }
    }

    /// Create an engine and apply the render settings from `config`
    ///
    /// Intensity is not applied here because it needs the bus; call
    /// `set_intensity` once the device is initialized.
    pub fn from_config(device: D, font: F, config: &MatrixConfig) -> Self {
        let mut matrix = Self::new(device, font);
        matrix.set_char_width(config.char_width);
        matrix.set_text_alignment(config.alignment);
        matrix.set_rotate(config.rotate);
        matrix.set_text(&config.text);
        if let Some(next) = &config.next_text {
            matrix.set_next_text(next);
        }
        matrix
    }

    /// Zero the framebuffer
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Set the pixel at (`col`, `row`)
    ///
    /// Pixels are only ever set; use `clear` or `set_column` to turn them off.
    pub fn set_pixel(&mut self, col: i32, row: u8) {
        self.framebuffer.set_pixel(col, row);
    }

    /// Overwrite a column; out-of-range columns are ignored
    pub fn set_column(&mut self, col: i32, value: u8) {
        self.framebuffer.set_column(col, value);
    }

    /// Read back a column
    pub fn column(&self, col: usize) -> Option<u8> {
        self.framebuffer.column(col)
    }

    /// Set the glyph pitch (glyph width plus spacing) in columns
    pub fn set_char_width(&mut self, width: u8) {
        self.text.set_char_width(width);
    }

    /// Set the text alignment mode
    pub fn set_text_alignment(&mut self, alignment: TextAlignment) {
        self.text.set_alignment(alignment);
    }

    /// Replace the text; the cursor restarts at 1
    pub fn set_text(&mut self, text: &str) {
        self.text.set_text(text);
    }

    /// Stage text to replace the current one when a left scroll wraps
    pub fn set_next_text(&mut self, text: &str) {
        self.text.set_next_text(text);
    }

    /// Move the cursor to an explicit position
    pub fn set_cursor(&mut self, cursor: i32) {
        self.text.set_cursor(cursor);
    }

    /// Scroll the text one column right
    ///
    /// Must not be called with text exactly 5 columns wide.
    pub fn scroll_text_right(&mut self) {
        self.text.scroll_right();
    }

    /// Scroll the text one column left
    ///
    /// Returns `true` when the staged next text was swapped in.
    pub fn scroll_text_left(&mut self) -> bool {
        self.text.scroll_left()
    }

    /// Advance the bounce animation by one column
    pub fn oscillate_text(&mut self) {
        self.text.oscillate();
    }

    /// Render the current text into the framebuffer
    ///
    /// Does not clear first. With rotation enabled, a pixel that would land
    /// outside the framebuffer stops the whole draw, leaving later glyphs
    /// unrendered.
    pub fn draw_text(&mut self) {
        let width = self.text.char_width() as usize;

        for (index, &code) in self.text.text().iter().enumerate() {
            let glyph = self.font.glyph(code);
            // Pitch wider than the glyph renders as blank spacing
            let columns = (0..width).map(|col| glyph.get(col).copied().unwrap_or(0));
            // Glyphs beyond the i32 column range are off-screen
            let Some(origin) = self.text.glyph_position(index, 0) else {
                continue;
            };

            if render_glyph(&mut self.framebuffer, origin, columns, self.rotate).is_break() {
                return;
            }
        }
    }

    /// Render a caller-supplied glyph at absolute column `x`
    ///
    /// `data` holds one byte per column; its length is the glyph width.
    /// Text, cursor and alignment are not involved.
    pub fn set_custom_char(&mut self, x: i32, data: &[u8]) {
        let _ = render_glyph(&mut self.framebuffer, x, data.iter().copied(), self.rotate);
    }

    /// Enable or disable 90-degree glyph rotation
    pub fn set_rotate(&mut self, rotate: bool) {
        self.rotate = rotate;
    }

    /// Check whether rotation is enabled
    pub fn is_rotated(&self) -> bool {
        self.rotate
    }

    /// Set the brightness of every module (0-15)
    pub fn set_intensity(&mut self, level: u8) -> Result<(), D::Error> {
        self.device.set_intensity(level)
    }

    /// Transmit the framebuffer to the chain
    pub fn commit(&mut self) -> Result<(), D::Error> {
        self.device.commit(&self.framebuffer)
    }

    /// Produce one animation frame
    ///
    /// Advances the cursor according to `mode`, then clears, draws and
    /// commits. Returns `true` if a left scroll swapped in the next text.
    pub fn tick(&mut self, mode: ScrollMode) -> Result<bool, D::Error> {
        let swapped = match mode {
            ScrollMode::Static => false,
            ScrollMode::Left => self.scroll_text_left(),
            ScrollMode::Right => {
                self.scroll_text_right();
                false
            }
            ScrollMode::Oscillate => {
                self.oscillate_text();
                false
            }
        };

        self.clear();
        self.draw_text();
        self.commit()?;
        Ok(swapped)
    }

    /// Current text as glyph codes
    pub fn text(&self) -> &[u8] {
        self.text.text()
    }

    /// Staged next text as glyph codes
    pub fn next_text(&self) -> &[u8] {
        self.text.next_text()
    }

    /// Current scroll cursor
    pub fn cursor(&self) -> i32 {
        self.text.cursor()
    }

    /// Current alignment offset
    pub fn alignment_offset(&self) -> i32 {
        self.text.alignment_offset()
    }

    /// Current alignment mode
    pub fn alignment(&self) -> TextAlignment {
        self.text.alignment()
    }

    /// Current char width
    pub fn char_width(&self) -> u8 {
        self.text.char_width()
    }

    /// Display width in columns
    pub fn display_columns(&self) -> usize {
        self.framebuffer.len()
    }

    /// The framebuffer
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// The text state
    pub fn text_state(&self) -> &TextState {
        &self.text
    }

    /// The underlying device
    pub fn device(&self) -> &D {
        &self.device
    }

    /// The underlying device, mutably
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Give the device back
    pub fn release(self) -> D {
        self.device
    }
}
