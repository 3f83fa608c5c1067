//! Display animation task
//!
//! Renders one frame per tick: advance the cursor, clear, draw, commit.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::{Delay, Duration, Ticker};

use ledmatrix_core::{Font8x8, LedMatrix, ScrollMode};
use ledmatrix_drivers::Max7219;

/// Frames between trace heartbeats
const HEARTBEAT_FRAMES: u32 = 500;

/// The concrete display stack on SPI0
pub type Display = LedMatrix<Max7219<Spi<'static, SPI0, Blocking>, Output<'static>, Delay>, Font8x8>;

/// Display task - animates the text at a fixed frame rate
#[embassy_executor::task]
pub async fn display_task(mut display: Display, mode: ScrollMode, frame: Duration) {
    info!("Display task started ({} ms/frame)", frame.as_millis());

    let mut ticker = Ticker::every(frame);
    let mut frames: u32 = 0;

    loop {
        ticker.next().await;

        match display.tick(mode) {
            Ok(true) => info!("Next text swapped in"),
            Ok(false) => {}
            // Not retried
            Err(e) => error!("Frame commit failed: {}", e),
        }

        frames = frames.wrapping_add(1);
        if frames % HEARTBEAT_FRAMES == 0 {
            trace!("Frame {}, cursor {}", frames, display.cursor());
        }
    }
}
