//! Text state: alignment, scrolling and oscillation
//!
//! The cursor lifecycle is:
//!
//! ```text
//! Empty -> TextSet -> Scrolling -> (cursor hits 0, next text staged) -> Scrolling
//! ```
//!
//! Oscillation is independent and bounces forever.

pub mod alignment;
pub mod state;

pub use alignment::TextAlignment;
pub use state::{encode_text, TextCodes, TextState, DEFAULT_CHAR_WIDTH, INITIAL_CURSOR, MAX_TEXT_LEN};
