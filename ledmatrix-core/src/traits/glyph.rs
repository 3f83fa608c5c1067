//! Glyph source trait
//!
//! The engine reads every character bitmap through `GlyphSource`, so the
//! built-in 8x8 font can be replaced by any 256-entry column table (a
//! custom font, a symbol set, a `static` array) without touching the
//! renderer.

/// Number of columns stored per glyph
pub const GLYPH_COLUMNS: usize = 8;

/// Read-only character bitmap table
///
/// Each glyph is 8 column bytes, left to right. Bit 0 of a column byte is
/// the top row.
pub trait GlyphSource {
    /// Get the glyph for a character code (0-255)
    fn glyph(&self, code: u8) -> [u8; GLYPH_COLUMNS];
}

impl<T: GlyphSource + ?Sized> GlyphSource for &T {
    fn glyph(&self, code: u8) -> [u8; GLYPH_COLUMNS] {
        (**self).glyph(code)
    }
}

impl GlyphSource for [[u8; GLYPH_COLUMNS]; 256] {
    fn glyph(&self, code: u8) -> [u8; GLYPH_COLUMNS] {
        self[code as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_table_is_a_glyph_source() {
        let mut table = [[0u8; GLYPH_COLUMNS]; 256];
        table[b'x' as usize] = [0x81; GLYPH_COLUMNS];

        assert_eq!(table.glyph(b'x'), [0x81; GLYPH_COLUMNS]);
        assert_eq!((&table).glyph(b'x'), [0x81; GLYPH_COLUMNS]);
        assert_eq!(table.glyph(b'y'), [0; GLYPH_COLUMNS]);
    }
}
