//! Embassy tasks
//!
//! The firmware runs a single task: the display animation.

mod display;

pub use display::{display_task, Display};
