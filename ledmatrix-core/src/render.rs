//! Glyph rasterizer
//!
//! Writes glyph columns into the framebuffer, either directly (one glyph
//! column per display column) or rotated by 90 degrees within the 8x8
//! block of the module the column lands on.
//!
//! # Rotation
//!
//! With rotation enabled, glyph column `position % 8` becomes display row
//! `7 - position % 8`, and glyph row `r` becomes column `r` of the module
//! that `position` falls in:
//!
//! ```text
//! target column = (position / 8) * 8 + r
//! target row    = 7 - position % 8
//! ```

use core::ops::ControlFlow;

use crate::framebuffer::{Framebuffer, COLUMNS_PER_DEVICE};

/// Render one glyph column at display column `position`
///
/// Positions outside the framebuffer are skipped. Returns
/// `ControlFlow::Break` if a rotated pixel lands outside the framebuffer;
/// callers stop drawing at that point.
pub fn render_column(
    framebuffer: &mut Framebuffer,
    position: i32,
    column: u8,
    rotate: bool,
) -> ControlFlow<()> {
    if position < 0 || position >= framebuffer.len() as i32 {
        return ControlFlow::Continue(());
    }

    if !rotate {
        framebuffer.set_column(position, column);
        return ControlFlow::Continue(());
    }

    let block = COLUMNS_PER_DEVICE as i32;
    let target_row = (block - 1 - position % block) as u8;
    for row in 0..COLUMNS_PER_DEVICE as i32 {
        if (column >> row) & 0x01 == 0 {
            continue;
        }
        let target = (position / block) * block + row;
        if target < 0 || target >= framebuffer.len() as i32 {
            return ControlFlow::Break(());
        }
        framebuffer.set_pixel(target, target_row);
    }
    ControlFlow::Continue(())
}

/// Render a run of glyph columns starting at display column `origin`
///
/// Stops at the first `Break` from `render_column` and passes it on.
/// Columns whose position does not fit in an `i32` are off-screen and
/// end the glyph.
pub fn render_glyph<I>(
    framebuffer: &mut Framebuffer,
    origin: i32,
    columns: I,
    rotate: bool,
) -> ControlFlow<()>
where
    I: IntoIterator<Item = u8>,
{
    for (offset, column) in columns.into_iter().enumerate() {
        let Some(position) = i32::try_from(offset).ok().and_then(|o| origin.checked_add(o)) else {
            break;
        };
        if render_column(framebuffer, position, column, rotate).is_break() {
            return ControlFlow::Break(());
        }
    }
    ControlFlow::Continue(())
}
