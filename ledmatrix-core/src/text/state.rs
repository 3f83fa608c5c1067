//! Text and cursor state
//!
//! Holds the current text, the staged next text and the cursor arithmetic
//! for scrolling and oscillation. Cursor wrapping uses Rust's truncating
//! `%`, so a negative cursor stays negative after wrapping. Intermediate
//! sums are widened to `i64`, so any cursor set through `set_cursor` is
//! safe to scroll and draw.

use heapless::Vec;

use super::alignment::TextAlignment;

/// Maximum text length in characters
pub const MAX_TEXT_LEN: usize = 128;

/// Default glyph pitch in columns (glyph plus spacing)
pub const DEFAULT_CHAR_WIDTH: u8 = 7;

/// Cursor value after `set_text`
///
/// Text starts one column to the right of its aligned position.
pub const INITIAL_CURSOR: i32 = 1;

/// Columns subtracted from the text width when wrapping a right scroll
const SCROLL_RIGHT_TRIM: i32 = 5;

/// Glyph codes of a piece of text
pub type TextCodes = Vec<u8, MAX_TEXT_LEN>;

/// Convert text to glyph codes
///
/// Characters up to U+00FF map to their code point, anything else to `?`.
/// Text longer than `MAX_TEXT_LEN` characters is truncated.
pub fn encode_text(text: &str) -> TextCodes {
    text.chars()
        .take(MAX_TEXT_LEN)
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

/// Text rendering state
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextState {
    /// Glyph codes of the text being shown
    text: TextCodes,
    /// Text swapped in when a left scroll wraps to cursor 0
    next_text: TextCodes,
    /// Columns per glyph, including spacing
    char_width: u8,
    /// Scroll position, added to every glyph column
    cursor: i32,
    /// Alignment mode
    alignment: TextAlignment,
    /// Derived from alignment, text length, char width and display width
    alignment_offset: i32,
    /// Oscillation step (+1 or -1)
    direction: i32,
    /// Display width in columns
    display_columns: i32,
}

impl TextState {
    /// Create empty text state for a display `display_columns` wide
    pub fn new(display_columns: usize) -> Self {
        Self {
            text: Vec::new(),
            next_text: Vec::new(),
            char_width: DEFAULT_CHAR_WIDTH,
            cursor: 0,
            alignment: TextAlignment::Left,
            alignment_offset: 0,
            direction: -1,
            display_columns: display_columns as i32,
        }
    }

    /// Replace the current text
    ///
    /// Resets the cursor to `INITIAL_CURSOR` and recomputes the alignment.
    pub fn set_text(&mut self, text: &str) {
        self.text = encode_text(text);
        self.cursor = INITIAL_CURSOR;
        self.update_alignment_offset();
    }

    /// Stage text to swap in at the end of the current left-scroll cycle
    pub fn set_next_text(&mut self, text: &str) {
        self.next_text = encode_text(text);
    }

    /// Set the glyph pitch in columns
    pub fn set_char_width(&mut self, width: u8) {
        self.char_width = width;
        self.update_alignment_offset();
    }

    /// Set the alignment mode
    pub fn set_alignment(&mut self, alignment: TextAlignment) {
        self.alignment = alignment;
        self.update_alignment_offset();
    }

    /// Move the cursor to an explicit position
    pub fn set_cursor(&mut self, cursor: i32) {
        self.cursor = cursor;
    }

    /// Advance the cursor one column to the right
    ///
    /// Wraps at `text_columns - 5`. Must not be called with text exactly 5
    /// columns wide; that call leaves the cursor unchanged.
    pub fn scroll_right(&mut self) {
        let modulus = i64::from(self.text_columns() - SCROLL_RIGHT_TRIM);
        if modulus == 0 {
            return;
        }
        self.cursor = wrap(i64::from(self.cursor) + 1, modulus);
    }

    /// Move the cursor one column to the left
    ///
    /// Wraps at `text_columns + display_columns`. When the cursor lands on
    /// 0 and next text is staged, it becomes the current text. Returns
    /// `true` if the text was swapped.
    pub fn scroll_left(&mut self) -> bool {
        let modulus = i64::from(self.text_columns()) + i64::from(self.display_columns);
        self.cursor = wrap(i64::from(self.cursor) - 1, modulus);

        if self.cursor == 0 && !self.next_text.is_empty() {
            self.text = core::mem::take(&mut self.next_text);
            self.update_alignment_offset();
            return true;
        }
        false
    }

    /// Bounce the text between its two extremes
    ///
    /// Does nothing when the text fits on the display.
    pub fn oscillate(&mut self) {
        let text_columns = self.text_columns();
        if self.display_columns >= text_columns {
            return;
        }

        // Both edges are checked every call, left first
        if self.cursor.saturating_sub(self.display_columns) <= -text_columns {
            self.direction = 1;
        }
        if self.cursor >= 0 {
            self.direction = -1;
        }
        self.cursor = self.cursor.saturating_add(self.direction);
    }

    /// Absolute display column of glyph column `col` of character `index`
    ///
    /// `None` if the position does not fit in an `i32`; such a column is
    /// off-screen.
    pub fn glyph_position(&self, index: usize, col: usize) -> Option<i32> {
        let position = index as i64 * i64::from(self.char_width)
            + col as i64
            + i64::from(self.cursor)
            + i64::from(self.alignment_offset);
        i32::try_from(position).ok()
    }

    /// Text width in columns (length times char width)
    pub fn text_columns(&self) -> i32 {
        self.text.len() as i32 * self.char_width as i32
    }

    /// Glyph codes of the current text
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Glyph codes of the staged next text
    pub fn next_text(&self) -> &[u8] {
        &self.next_text
    }

    /// Current char width
    pub fn char_width(&self) -> u8 {
        self.char_width
    }

    /// Current cursor
    pub fn cursor(&self) -> i32 {
        self.cursor
    }

    /// Current alignment mode
    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    /// Current alignment offset
    pub fn alignment_offset(&self) -> i32 {
        self.alignment_offset
    }

    /// Current oscillation direction (+1 or -1)
    pub fn direction(&self) -> i32 {
        self.direction
    }

    fn update_alignment_offset(&mut self) {
        self.alignment_offset = self
            .alignment
            .offset(self.text_columns(), self.display_columns);
    }
}

/// Truncating remainder of a widened cursor sum
///
/// The result is smaller in magnitude than `modulus`, which is itself an
/// `i32` sum, so it fits back into `i32`.
fn wrap(value: i64, modulus: i64) -> i32 {
    (value % modulus) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn state(display_columns: usize, width: u8, text: &str) -> TextState {
        let mut s = TextState::new(display_columns);
        s.set_char_width(width);
        s.set_text(text);
        s
    }

    #[test]
    fn test_encode_text() {
        assert_eq!(encode_text("Hi!").as_slice(), b"Hi!");
        // Latin-1 maps directly, everything else is replaced
        assert_eq!(encode_text("\u{e9}\u{263a}").as_slice(), &[0xE9, b'?']);

        let long = "x".repeat(MAX_TEXT_LEN + 10);
        assert_eq!(encode_text(&long).len(), MAX_TEXT_LEN);
    }

    #[test]
    fn test_set_text_resets_cursor() {
        let mut s = state(8, 6, "AB");
        s.set_cursor(-7);
        s.set_text("CD");
        assert_eq!(s.cursor(), INITIAL_CURSOR);
        assert_eq!(s.text(), b"CD");
    }

    #[test]
    fn test_alignment_tracks_text_and_width() {
        let mut s = state(32, 6, "HELLO");
        s.set_alignment(TextAlignment::Right);
        assert_eq!(s.alignment_offset(), 30 - 32);

        s.set_text("HELLO WORLD");
        assert_eq!(s.alignment_offset(), 66 - 32);

        s.set_char_width(8);
        assert_eq!(s.alignment_offset(), 88 - 32);

        s.set_alignment(TextAlignment::RightEnd);
        assert_eq!(s.alignment_offset(), -88);

        s.set_alignment(TextAlignment::LeftEnd);
        assert_eq!(s.alignment_offset(), 32);
    }

    #[test]
    fn test_alignment_recomputed_on_swap() {
        let mut s = state(8, 6, "AB");
        s.set_alignment(TextAlignment::RightEnd);
        s.set_next_text("WXYZ");
        assert_eq!(s.alignment_offset(), -12);

        // Cursor 1 -> 0 triggers the swap
        assert!(s.scroll_left());
        assert_eq!(s.text(), b"WXYZ");
        assert!(s.next_text().is_empty());
        assert_eq!(s.alignment_offset(), -24);
    }

    #[test]
    fn test_scroll_right_wraps() {
        // 2 chars * 6 - 5 = 7
        let mut s = state(8, 6, "AB");
        for expected in [2, 3, 4, 5, 6, 0, 1] {
            s.scroll_right();
            assert_eq!(s.cursor(), expected);
        }
    }

    #[test]
    fn test_scroll_right_keeps_dividend_sign() {
        let mut s = state(8, 6, "AB");
        s.set_cursor(-10);
        s.scroll_right();
        // -9 % 7 truncates toward zero
        assert_eq!(s.cursor(), -2);
    }

    #[test]
    fn test_scroll_right_negative_modulus() {
        // 1 char * 4 - 5 = -1: every value wraps to 0
        let mut s = state(8, 4, "A");
        s.scroll_right();
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn test_scroll_right_zero_modulus_is_noop() {
        let mut s = state(8, 5, "A");
        s.scroll_right();
        assert_eq!(s.cursor(), INITIAL_CURSOR);
    }

    #[test]
    fn test_scroll_left_wraps_negative() {
        // 2 * 6 + 8 = 20
        let mut s = state(8, 6, "AB");
        s.scroll_left();
        assert_eq!(s.cursor(), 0);
        s.scroll_left();
        assert_eq!(s.cursor(), -1);
        for _ in 0..18 {
            s.scroll_left();
        }
        assert_eq!(s.cursor(), -19);
        s.scroll_left();
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn test_scroll_left_without_next_text_keeps_text() {
        let mut s = state(8, 6, "AB");
        assert!(!s.scroll_left());
        assert_eq!(s.text(), b"AB");
    }

    #[test]
    fn test_scroll_left_hits_zero_once_per_cycle() {
        let mut s = state(16, 7, "HELLO");
        let cycle = 5 * 7 + 16;
        s.scroll_left(); // 1 -> 0

        let zeros = (0..cycle * 3)
            .filter(|_| {
                s.scroll_left();
                s.cursor() == 0
            })
            .count();
        assert_eq!(zeros, 3);
    }

    #[test]
    fn test_swap_happens_exactly_at_zero() {
        let mut s = state(8, 6, "AB");
        s.scroll_left(); // now at 0, nothing staged
        s.set_next_text("C");

        let mut swapped_at = None;
        for step in 1..=20 {
            if s.scroll_left() {
                swapped_at = Some(step);
                assert_eq!(s.cursor(), 0);
                break;
            }
        }
        assert_eq!(swapped_at, Some(20));
        assert_eq!(s.text(), b"C");
    }

    #[test]
    fn test_oscillate_fitting_text_is_noop() {
        let mut s = state(32, 6, "ABCD");
        for _ in 0..100 {
            s.oscillate();
            assert_eq!(s.cursor(), INITIAL_CURSOR);
        }
    }

    #[test]
    fn test_oscillate_exact_fit_is_noop() {
        let mut s = state(24, 6, "ABCD");
        s.oscillate();
        assert_eq!(s.cursor(), INITIAL_CURSOR);
    }

    #[test]
    fn test_oscillate_bounces() {
        // 30 text columns on an 8-column display: extremes are -22 and 0
        let mut s = state(8, 6, "HELLO");
        let mut min = i32::MAX;
        let mut max = i32::MIN;
        for _ in 0..200 {
            s.oscillate();
            min = min.min(s.cursor());
            max = max.max(s.cursor());
        }
        assert_eq!(min, -22);
        assert_eq!(max, 0);
    }

    #[test]
    fn test_oscillate_turns_at_left_extreme() {
        let mut s = state(8, 6, "HELLO");
        s.set_cursor(-22);
        s.oscillate();
        assert_eq!(s.direction(), 1);
        assert_eq!(s.cursor(), -21);
    }

    #[test]
    fn test_glyph_position() {
        let mut s = state(8, 6, "AB");
        s.set_alignment(TextAlignment::LeftEnd);
        // 1 * 6 + 2 + cursor 1 + offset 8
        assert_eq!(s.glyph_position(1, 2), Some(17));
    }

    #[test]
    fn test_glyph_position_out_of_i32_range() {
        let mut s = state(8, 6, "AB");
        s.set_cursor(i32::MAX);
        assert_eq!(s.glyph_position(0, 0), Some(i32::MAX));
        assert_eq!(s.glyph_position(1, 0), None);

        s.set_alignment(TextAlignment::RightEnd);
        s.set_cursor(i32::MIN);
        assert_eq!(s.glyph_position(0, 0), None);
    }

    #[test]
    fn test_scroll_at_cursor_extremes() {
        // 2 * 6 + 8 = 20; i32::MIN - 1 wraps like any other negative value
        let mut s = state(8, 6, "AB");
        s.set_cursor(i32::MIN);
        s.scroll_left();
        assert_eq!(s.cursor(), ((i64::from(i32::MIN) - 1) % 20) as i32);

        // 2 * 6 - 5 = 7
        s.set_cursor(i32::MAX);
        s.scroll_right();
        assert_eq!(s.cursor(), ((i64::from(i32::MAX) + 1) % 7) as i32);
    }

    #[test]
    fn test_oscillate_at_cursor_extremes() {
        let mut s = state(8, 6, "HELLO");
        s.set_cursor(i32::MIN);
        s.oscillate();
        assert_eq!(s.direction(), 1);
        assert_eq!(s.cursor(), i32::MIN + 1);

        s.set_cursor(i32::MAX);
        s.oscillate();
        assert_eq!(s.direction(), -1);
        assert_eq!(s.cursor(), i32::MAX - 1);
    }

    proptest! {
        #[test]
        fn prop_left_alignment_is_zero(text in "[ -~]{0,40}", width in 1u8..16, devices in 1usize..8) {
            let mut s = TextState::new(devices * 8);
            s.set_char_width(width);
            s.set_text(&text);
            s.set_alignment(TextAlignment::Left);
            prop_assert_eq!(s.alignment_offset(), 0);
        }

        #[test]
        fn prop_right_alignment_formula(text in "[ -~]{0,40}", width in 1u8..16, devices in 1usize..8) {
            let mut s = TextState::new(devices * 8);
            s.set_alignment(TextAlignment::Right);
            s.set_char_width(width);
            s.set_text(&text);
            let expected = text.len() as i32 * width as i32 - devices as i32 * 8;
            prop_assert_eq!(s.alignment_offset(), expected);
        }

        #[test]
        fn prop_oscillate_fitting_text_never_moves(len in 0usize..5, width in 1u8..8, steps in 1usize..200) {
            let text = "X".repeat(len);
            let mut s = state(32, width, &text);
            for _ in 0..steps {
                s.oscillate();
            }
            prop_assert_eq!(s.cursor(), INITIAL_CURSOR);
        }

        #[test]
        fn prop_scroll_left_stays_in_range(text in "[A-Z]{1,20}", width in 1u8..10, steps in 0usize..500) {
            let mut s = state(16, width, &text);
            let modulus = s.text_columns() + 16;
            for _ in 0..steps {
                s.scroll_left();
                prop_assert!(s.cursor() > -modulus && s.cursor() <= 0);
            }
        }
    }
}
