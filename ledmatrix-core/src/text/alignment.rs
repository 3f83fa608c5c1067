//! Text alignment modes

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Horizontal placement of text relative to the display
///
/// `LeftEnd` and `RightEnd` place the text just outside the display, ready
/// to be scrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TextAlignment {
    /// Text starts at column 0
    #[default]
    Left,
    /// Text starts just past the last display column
    LeftEnd,
    /// Right edge of the text flush with the right edge of the display
    Right,
    /// Text entirely past the left edge
    RightEnd,
}

impl TextAlignment {
    /// Compute the alignment offset in columns
    ///
    /// - `text_columns`: text length times char width
    /// - `display_columns`: device count times 8
    pub const fn offset(self, text_columns: i32, display_columns: i32) -> i32 {
        match self {
            TextAlignment::Left => 0,
            TextAlignment::LeftEnd => display_columns,
            TextAlignment::Right => text_columns - display_columns,
            TextAlignment::RightEnd => -text_columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        // 5 chars at width 6 on 4 modules
        assert_eq!(TextAlignment::Left.offset(30, 32), 0);
        assert_eq!(TextAlignment::LeftEnd.offset(30, 32), 32);
        assert_eq!(TextAlignment::Right.offset(30, 32), -2);
        assert_eq!(TextAlignment::RightEnd.offset(30, 32), -30);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(TextAlignment::Right.offset(0, 8), -8);
        assert_eq!(TextAlignment::RightEnd.offset(0, 8), 0);
    }
}
