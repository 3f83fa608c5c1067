//! ledmatrix - MAX7219 Text Display Firmware
//!
//! Main firmware binary for an RP2040 driving a chain of MAX7219 8x8 LED
//! modules. Text, layout and animation come from matrix.toml, embedded at
//! build time.
//!
//! Wiring (Raspberry Pi Pico):
//! - GPIO18: SPI0 SCK  -> CLK
//! - GPIO19: SPI0 TX   -> DIN
//! - GPIO17: output    -> CS

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{self, Spi};
use embassy_time::{Delay, Duration};
use {defmt_rtt as _, panic_probe as _};

use ledmatrix_core::{Font8x8, LedMatrix};
use ledmatrix_drivers::Max7219;

mod config;
mod tasks;

/// SPI clock; the MAX7219 accepts up to 10 MHz
const SPI_FREQUENCY_HZ: u32 = 1_000_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("ledmatrix firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();

    // Default config is mode 0, matching ledmatrix_drivers::max7219::SPI_MODE
    let mut spi_config = spi::Config::default();
    spi_config.frequency = SPI_FREQUENCY_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let cs = Output::new(p.PIN_17, Level::High);

    let mut driver = match Max7219::new(spi, cs, Delay, config.devices as usize) {
        Ok(driver) => driver,
        Err(e) => defmt::panic!("Invalid chain length: {}", e),
    };

    if let Err(e) = driver.init() {
        error!("MAX7219 init failed: {}", e);
    }
    info!("MAX7219 chain initialized ({} devices)", driver.device_count());

    let mut display = LedMatrix::from_config(driver, Font8x8, &config);
    if let Err(e) = display.set_intensity(config.intensity) {
        error!("Failed to set intensity: {}", e);
    }
    info!(
        "Display ready: {} columns, alignment {}, rotate {}",
        display.display_columns(),
        display.alignment(),
        display.is_rotated()
    );

    let frame = Duration::from_millis(config.frame_ms as u64);
    spawner
        .spawn(tasks::display_task(display, config.scroll, frame))
        .unwrap();

    info!("Display task spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
