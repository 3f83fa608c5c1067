//! Built-in 8x8 font
//!
//! The glyphs are the public-domain `font8x8_basic` (U+0020-U+007F) and
//! `font8x8_ext_latin` (U+00A0-U+00FF) sets, stored row-major with bit 0
//! as the leftmost pixel. The matrix wants column-major glyphs with bit 0
//! as the top pixel, so the table is transposed at compile time.
//!
//! Control codes (0x00-0x1F and 0x80-0x9F) render blank.

use crate::traits::{GlyphSource, GLYPH_COLUMNS};

/// First code covered by the row table
const FIRST_CODE: usize = 0x20;

/// Row-major glyphs for U+0020..U+007F
const ROWS: [[u8; 8]; 96] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x18, 0x3C, 0x3C, 0x18, 0x18, 0x00, 0x18, 0x00], // '!'
    [0x36, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '"'
    [0x36, 0x36, 0x7F, 0x36, 0x7F, 0x36, 0x36, 0x00], // '#'
    [0x0C, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x0C, 0x00], // '$'
    [0x00, 0x63, 0x33, 0x18, 0x0C, 0x66, 0x63, 0x00], // '%'
    [0x1C, 0x36, 0x1C, 0x6E, 0x3B, 0x33, 0x6E, 0x00], // '&'
    [0x06, 0x06, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00], // '''
    [0x18, 0x0C, 0x06, 0x06, 0x06, 0x0C, 0x18, 0x00], // '('
    [0x06, 0x0C, 0x18, 0x18, 0x18, 0x0C, 0x06, 0x00], // ')'
    [0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00], // '*'
    [0x00, 0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x00], // '+'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ','
    [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00], // '.'
    [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x01, 0x00], // '/'
    [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00], // '0'
    [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00], // '1'
    [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00], // '2'
    [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00], // '3'
    [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00], // '4'
    [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00], // '5'
    [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00], // '6'
    [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00], // '7'
    [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00], // '8'
    [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00], // '9'
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00], // ':'
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ';'
    [0x18, 0x0C, 0x06, 0x03, 0x06, 0x0C, 0x18, 0x00], // '<'
    [0x00, 0x00, 0x3F, 0x00, 0x00, 0x3F, 0x00, 0x00], // '='
    [0x06, 0x0C, 0x18, 0x30, 0x18, 0x0C, 0x06, 0x00], // '>'
    [0x1E, 0x33, 0x30, 0x18, 0x0C, 0x00, 0x0C, 0x00], // '?'
    [0x3E, 0x63, 0x7B, 0x7B, 0x7B, 0x03, 0x1E, 0x00], // '@'
    [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00], // 'A'
    [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00], // 'B'
    [0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x00], // 'C'
    [0x1F, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1F, 0x00], // 'D'
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00], // 'E'
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x06, 0x0F, 0x00], // 'F'
    [0x3C, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7C, 0x00], // 'G'
    [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00], // 'H'
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'I'
    [0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E, 0x00], // 'J'
    [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00], // 'K'
    [0x0F, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7F, 0x00], // 'L'
    [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00], // 'M'
    [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00], // 'N'
    [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00], // 'O'
    [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00], // 'P'
    [0x1E, 0x33, 0x33, 0x33, 0x3B, 0x1E, 0x38, 0x00], // 'Q'
    [0x3F, 0x66, 0x66, 0x3E, 0x36, 0x66, 0x67, 0x00], // 'R'
    [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00], // 'S'
    [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'T'
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // 'U'
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // 'V'
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00], // 'W'
    [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00], // 'X'
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // 'Y'
    [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00], // 'Z'
    [0x1E, 0x06, 0x06, 0x06, 0x06, 0x06, 0x1E, 0x00], // '['
    [0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x40, 0x00], // '\'
    [0x1E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x1E, 0x00], // ']'
    [0x08, 0x1C, 0x36, 0x63, 0x00, 0x00, 0x00, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // '_'
    [0x0C, 0x0C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], // '`'
    [0x00, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // 'a'
    [0x07, 0x06, 0x06, 0x3E, 0x66, 0x66, 0x3B, 0x00], // 'b'
    [0x00, 0x00, 0x1E, 0x33, 0x03, 0x33, 0x1E, 0x00], // 'c'
    [0x38, 0x30, 0x30, 0x3E, 0x33, 0x33, 0x6E, 0x00], // 'd'
    [0x00, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // 'e'
    [0x1C, 0x36, 0x06, 0x0F, 0x06, 0x06, 0x0F, 0x00], // 'f'
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x1F], // 'g'
    [0x07, 0x06, 0x36, 0x6E, 0x66, 0x66, 0x67, 0x00], // 'h'
    [0x0C, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'i'
    [0x30, 0x00, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E], // 'j'
    [0x07, 0x06, 0x66, 0x36, 0x1E, 0x36, 0x67, 0x00], // 'k'
    [0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'l'
    [0x00, 0x00, 0x33, 0x7F, 0x7F, 0x6B, 0x63, 0x00], // 'm'
    [0x00, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x00], // 'n'
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // 'o'
    [0x00, 0x00, 0x3B, 0x66, 0x66, 0x3E, 0x06, 0x0F], // 'p'
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x78], // 'q'
    [0x00, 0x00, 0x3B, 0x6E, 0x66, 0x06, 0x0F, 0x00], // 'r'
    [0x00, 0x00, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x00], // 's'
    [0x08, 0x0C, 0x3E, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // 't'
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // 'u'
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // 'v'
    [0x00, 0x00, 0x63, 0x6B, 0x7F, 0x7F, 0x36, 0x00], // 'w'
    [0x00, 0x00, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x00], // 'x'
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // 'y'
    [0x00, 0x00, 0x3F, 0x19, 0x0C, 0x26, 0x3F, 0x00], // 'z'
    [0x38, 0x0C, 0x0C, 0x07, 0x0C, 0x0C, 0x38, 0x00], // '{'
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // '|'
    [0x07, 0x0C, 0x0C, 0x38, 0x0C, 0x0C, 0x07, 0x00], // '}'
    [0x6E, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '~'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // DEL
];

/// First code covered by the Latin-1 supplement table
const FIRST_LATIN1_CODE: usize = 0xA0;

/// Row-major glyphs for U+00A0..U+00FF (`font8x8_ext_latin`)
const LATIN1_ROWS: [[u8; 8]; 96] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // NBSP
    [0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x18, 0x00], // '¡'
    [0x18, 0x18, 0x7E, 0x03, 0x03, 0x7E, 0x18, 0x18], // '¢'
    [0x1C, 0x36, 0x26, 0x0F, 0x06, 0x67, 0x3F, 0x00], // '£'
    [0x00, 0x00, 0x63, 0x3E, 0x36, 0x3E, 0x63, 0x00], // '¤'
    [0x33, 0x33, 0x1E, 0x3F, 0x0C, 0x3F, 0x0C, 0x0C], // '¥'
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // '¦'
    [0x7C, 0xC6, 0x1C, 0x36, 0x36, 0x1C, 0x33, 0x1E], // '§'
    [0x33, 0x33, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '¨'
    [0x3C, 0x42, 0x99, 0x85, 0x85, 0x99, 0x42, 0x3C], // '©'
    [0x3C, 0x36, 0x36, 0x7C, 0x00, 0x00, 0x00, 0x00], // 'ª'
    [0x00, 0xCC, 0x66, 0x33, 0x66, 0xCC, 0x00, 0x00], // '«'
    [0x00, 0x00, 0x00, 0x3F, 0x30, 0x30, 0x00, 0x00], // '¬'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // SHY
    [0x3C, 0x42, 0x9D, 0xA5, 0x9D, 0xA5, 0x42, 0x3C], // '®'
    [0x3F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '¯'
    [0x1C, 0x36, 0x36, 0x1C, 0x00, 0x00, 0x00, 0x00], // '°'
    [0x18, 0x18, 0x7E, 0x18, 0x18, 0x00, 0x7E, 0x00], // '±'
    [0x1C, 0x30, 0x18, 0x0C, 0x3C, 0x00, 0x00, 0x00], // '²'
    [0x1C, 0x30, 0x18, 0x30, 0x1C, 0x00, 0x00, 0x00], // '³'
    [0x18, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '´'
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x03], // 'µ'
    [0xFE, 0xDB, 0xDB, 0xDE, 0xD8, 0xD8, 0xD8, 0x00], // '¶'
    [0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00], // '·'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x0C], // '¸'
    [0x08, 0x0C, 0x08, 0x1C, 0x00, 0x00, 0x00, 0x00], // '¹'
    [0x1C, 0x36, 0x36, 0x1C, 0x00, 0x00, 0x00, 0x00], // 'º'
    [0x00, 0x33, 0x66, 0xCC, 0x66, 0x33, 0x00, 0x00], // '»'
    [0xC3, 0x63, 0x33, 0xBD, 0xEC, 0xF6, 0xF3, 0x03], // '¼'
    [0xC3, 0x63, 0x33, 0x7B, 0xCC, 0x66, 0x33, 0xF0], // '½'
    [0x03, 0xC4, 0x63, 0xB4, 0xDB, 0xEC, 0xF6, 0xF3], // '¾'
    [0x0C, 0x00, 0x0C, 0x06, 0x03, 0x33, 0x1E, 0x00], // '¿'
    [0x07, 0x00, 0x1C, 0x36, 0x63, 0x7F, 0x63, 0x00], // 'À'
    [0x70, 0x00, 0x1C, 0x36, 0x63, 0x7F, 0x63, 0x00], // 'Á'
    [0x1C, 0x36, 0x00, 0x3E, 0x63, 0x7F, 0x63, 0x00], // 'Â'
    [0x6E, 0x3B, 0x00, 0x3E, 0x63, 0x7F, 0x63, 0x00], // 'Ã'
    [0x63, 0x1C, 0x36, 0x63, 0x7F, 0x63, 0x63, 0x00], // 'Ä'
    [0x0C, 0x0C, 0x00, 0x1E, 0x33, 0x3F, 0x33, 0x00], // 'Å'
    [0x7C, 0x36, 0x33, 0x7F, 0x33, 0x33, 0x73, 0x00], // 'Æ'
    [0x1E, 0x33, 0x03, 0x33, 0x1E, 0x18, 0x30, 0x1E], // 'Ç'
    [0x07, 0x00, 0x3F, 0x06, 0x1E, 0x06, 0x3F, 0x00], // 'È'
    [0x38, 0x00, 0x3F, 0x06, 0x1E, 0x06, 0x3F, 0x00], // 'É'
    [0x0C, 0x12, 0x3F, 0x06, 0x1E, 0x06, 0x3F, 0x00], // 'Ê'
    [0x36, 0x00, 0x3F, 0x06, 0x1E, 0x06, 0x3F, 0x00], // 'Ë'
    [0x07, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'Ì'
    [0x38, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'Í'
    [0x0C, 0x12, 0x00, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // 'Î'
    [0x33, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'Ï'
    [0x3F, 0x66, 0x6F, 0x6F, 0x66, 0x66, 0x3F, 0x00], // 'Ð'
    [0x3F, 0x00, 0x33, 0x37, 0x3F, 0x3B, 0x33, 0x00], // 'Ñ'
    [0x0E, 0x00, 0x18, 0x3C, 0x66, 0x3C, 0x18, 0x00], // 'Ò'
    [0x70, 0x00, 0x18, 0x3C, 0x66, 0x3C, 0x18, 0x00], // 'Ó'
    [0x3C, 0x66, 0x18, 0x3C, 0x66, 0x3C, 0x18, 0x00], // 'Ô'
    [0x6E, 0x3B, 0x00, 0x3E, 0x63, 0x63, 0x3E, 0x00], // 'Õ'
    [0xC3, 0x18, 0x3C, 0x66, 0x66, 0x3C, 0x18, 0x00], // 'Ö'
    [0x00, 0x36, 0x1C, 0x08, 0x1C, 0x36, 0x00, 0x00], // '×'
    [0x5C, 0x36, 0x73, 0x7B, 0x6F, 0x36, 0x1D, 0x00], // 'Ø'
    [0x0E, 0x00, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // 'Ù'
    [0x70, 0x00, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // 'Ú'
    [0x3C, 0x66, 0x00, 0x66, 0x66, 0x66, 0x3C, 0x00], // 'Û'
    [0x33, 0x00, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // 'Ü'
    [0x70, 0x00, 0x66, 0x66, 0x3C, 0x18, 0x3C, 0x00], // 'Ý'
    [0x00, 0x03, 0x3E, 0x63, 0x3E, 0x03, 0x03, 0x00], // 'Þ'
    [0x00, 0x1E, 0x33, 0x1F, 0x33, 0x1F, 0x03, 0x03], // 'ß'
    [0x07, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x7E, 0x00], // 'à'
    [0x38, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x7E, 0x00], // 'á'
    [0x7E, 0xC3, 0x3C, 0x60, 0x7C, 0x66, 0xFC, 0x00], // 'â'
    [0x6E, 0x3B, 0x1E, 0x30, 0x3E, 0x33, 0x7E, 0x00], // 'ã'
    [0x33, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x7E, 0x00], // 'ä'
    [0x0C, 0x0C, 0x1E, 0x30, 0x3E, 0x33, 0x7E, 0x00], // 'å'
    [0x00, 0x00, 0xFE, 0x30, 0xFE, 0x33, 0xFE, 0x00], // 'æ'
    [0x00, 0x00, 0x1E, 0x03, 0x03, 0x1E, 0x30, 0x1C], // 'ç'
    [0x07, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // 'è'
    [0x38, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // 'é'
    [0x7E, 0xC3, 0x3C, 0x66, 0x7E, 0x06, 0x3C, 0x00], // 'ê'
    [0x33, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // 'ë'
    [0x07, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'ì'
    [0x1C, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'í'
    [0x3E, 0x63, 0x1C, 0x18, 0x18, 0x18, 0x3C, 0x00], // 'î'
    [0x33, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'ï'
    [0x1B, 0x0E, 0x1B, 0x30, 0x3E, 0x33, 0x1E, 0x00], // 'ð'
    [0x00, 0x1F, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x00], // 'ñ'
    [0x00, 0x07, 0x00, 0x1E, 0x33, 0x33, 0x1E, 0x00], // 'ò'
    [0x00, 0x38, 0x00, 0x1E, 0x33, 0x33, 0x1E, 0x00], // 'ó'
    [0x1E, 0x33, 0x00, 0x1E, 0x33, 0x33, 0x1E, 0x00], // 'ô'
    [0x6E, 0x3B, 0x00, 0x1E, 0x33, 0x33, 0x1E, 0x00], // 'õ'
    [0x00, 0x33, 0x00, 0x1E, 0x33, 0x33, 0x1E, 0x00], // 'ö'
    [0x18, 0x18, 0x00, 0x7E, 0x00, 0x18, 0x18, 0x00], // '÷'
    [0x00, 0x60, 0x3C, 0x76, 0x7E, 0x6E, 0x3C, 0x06], // 'ø'
    [0x00, 0x07, 0x00, 0x33, 0x33, 0x33, 0x7E, 0x00], // 'ù'
    [0x00, 0x38, 0x00, 0x33, 0x33, 0x33, 0x7E, 0x00], // 'ú'
    [0x1E, 0x33, 0x00, 0x33, 0x33, 0x33, 0x7E, 0x00], // 'û'
    [0x00, 0x33, 0x00, 0x33, 0x33, 0x33, 0x7E, 0x00], // 'ü'
    [0x00, 0x38, 0x00, 0x33, 0x33, 0x3E, 0x30, 0x1F], // 'ý'
    [0x00, 0x00, 0x06, 0x3E, 0x66, 0x3E, 0x06, 0x00], // 'þ'
    [0x00, 0x33, 0x00, 0x33, 0x33, 0x3E, 0x30, 0x1F], // 'ÿ'
];

/// Turn a row-major glyph (bit 0 = left) into a column-major one (bit 0 = top)
const fn transpose(rows: [u8; 8]) -> [u8; GLYPH_COLUMNS] {
    let mut columns = [0u8; GLYPH_COLUMNS];
    let mut row = 0;
    while row < 8 {
        let mut col = 0;
        while col < GLYPH_COLUMNS {
            if (rows[row] >> col) & 0x01 != 0 {
                columns[col] |= 1 << row;
            }
            col += 1;
        }
        row += 1;
    }
    columns
}

const fn build_table() -> [[u8; GLYPH_COLUMNS]; 256] {
    let mut table = [[0u8; GLYPH_COLUMNS]; 256];
    let mut i = 0;
    while i < ROWS.len() {
        table[FIRST_CODE + i] = transpose(ROWS[i]);
        table[FIRST_LATIN1_CODE + i] = transpose(LATIN1_ROWS[i]);
        i += 1;
    }
    table
}

/// Column-major glyph table indexed by character code
pub static FONT_8X8: [[u8; GLYPH_COLUMNS]; 256] = build_table();

/// The built-in 8x8 Latin-1 font
///
/// Glyphs are left-aligned and at most 8 columns wide; most are 6-7 wide,
/// so a char width of 7 or 8 gives readable spacing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Font8x8;

impl GlyphSource for Font8x8 {
    fn glyph(&self, code: u8) -> [u8; GLYPH_COLUMNS] {
        FONT_8X8[code as usize]
    }
}
