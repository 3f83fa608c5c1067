//! Blocking MAX7219 chain driver over `embedded-hal` SPI

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{Mode, SpiBus, MODE_0};

use ledmatrix_core::{Framebuffer, MatrixDevice, MAX_DEVICES};

use super::frame::{reg, register_frame, row_frame};

/// SPI mode the chain expects; use it when configuring the bus
pub const SPI_MODE: Mode = MODE_0;

/// Chip-select low time at startup, in milliseconds
pub const RESET_PULSE_MS: u32 = 20;

/// Register writes applied to every module by [`Max7219::init`], in order
const INIT_SEQUENCE: [(u8, u8); 5] = [
    (reg::SCAN_LIMIT, 7),   // scan all 8 rows
    (reg::DECODE_MODE, 0),  // raw matrix, no BCD
    (reg::DISPLAY_TEST, 0), // test off
    (reg::INTENSITY, 0),    // dimmest
    (reg::SHUTDOWN, 1),     // normal operation
];

/// MAX7219 driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Max7219Error<SpiE, PinE> {
    /// SPI bus error
    Spi(SpiE),
    /// Chip-select pin error
    Pin(PinE),
    /// Module index is not in the chain
    InvalidDevice,
    /// Chain length is zero or above `MAX_DEVICES`
    InvalidDeviceCount,
}

/// Driver for a chain of MAX7219 modules sharing one chip select
///
/// Module 0 is the first word shifted out, and holds columns 0-7 of the
/// framebuffer.
pub struct Max7219<SPI, CS, D> {
    spi: SPI,
    cs: CS,
    delay: D,
    devices: usize,
}

impl<SPI, CS, D> Max7219<SPI, CS, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    D: DelayNs,
{
    /// Create a driver for `devices` chained modules
    ///
    /// Does not touch the bus. Call [`init`](Self::init) before use.
    pub fn new(
        spi: SPI,
        cs: CS,
        delay: D,
        devices: usize,
    ) -> Result<Self, Max7219Error<SPI::Error, CS::Error>> {
        if devices == 0 || devices > MAX_DEVICES {
            return Err(Max7219Error::InvalidDeviceCount);
        }

        Ok(Self {
            spi,
            cs,
            delay,
            devices,
        })
    }

    /// Reset the select line and bring every module out of shutdown
    ///
    /// Leaves the modules scanning all rows at minimum intensity. Row
    /// registers are not cleared.
    pub fn init(&mut self) -> Result<(), Max7219Error<SPI::Error, CS::Error>> {
        // Discard anything clocked in during power-up
        self.cs.set_low().map_err(Max7219Error::Pin)?;
        self.delay.delay_ms(RESET_PULSE_MS);
        self.cs.set_high().map_err(Max7219Error::Pin)?;

        for device in 0..self.devices {
            for (register, value) in INIT_SEQUENCE {
                self.write_register(device, register, value)?;
            }
        }
        Ok(())
    }

    /// Write one register on one module; the rest of the chain sees NOOP
    pub fn write_register(
        &mut self,
        device: usize,
        register: u8,
        value: u8,
    ) -> Result<(), Max7219Error<SPI::Error, CS::Error>> {
        let frame =
            register_frame(self.devices, device, register, value).ok_or(Max7219Error::InvalidDevice)?;
        self.transmit(&frame)
    }

    /// Write the same register on every module, one frame per module
    pub fn write_register_all(
        &mut self,
        register: u8,
        value: u8,
    ) -> Result<(), Max7219Error<SPI::Error, CS::Error>> {
        for device in 0..self.devices {
            self.write_register(device, register, value)?;
        }
        Ok(())
    }

    /// Set brightness on every module
    ///
    /// The chip only uses the low nibble (0-15); the value is sent as-is.
    pub fn set_intensity(&mut self, level: u8) -> Result<(), Max7219Error<SPI::Error, CS::Error>> {
        self.write_register_all(reg::INTENSITY, level)
    }

    /// Power the chain down (`true`) or back up (`false`)
    ///
    /// Row data survives shutdown.
    pub fn set_shutdown(&mut self, shutdown: bool) -> Result<(), Max7219Error<SPI::Error, CS::Error>> {
        self.write_register_all(reg::SHUTDOWN, u8::from(!shutdown))
    }

    /// Light every LED regardless of row data
    pub fn set_display_test(&mut self, enabled: bool) -> Result<(), Max7219Error<SPI::Error, CS::Error>> {
        self.write_register_all(reg::DISPLAY_TEST, u8::from(enabled))
    }

    /// Zero every row register on every module
    pub fn clear(&mut self) -> Result<(), Max7219Error<SPI::Error, CS::Error>> {
        self.commit_framebuffer(&Framebuffer::new(self.devices))
    }

    /// Push a framebuffer to the chain, one frame per row
    pub fn commit_framebuffer(
        &mut self,
        framebuffer: &Framebuffer,
    ) -> Result<(), Max7219Error<SPI::Error, CS::Error>> {
        if framebuffer.device_count() != self.devices {
            return Err(Max7219Error::InvalidDeviceCount);
        }

        for row in 0..8 {
            let frame = row_frame(framebuffer, row);
            self.transmit(&frame)?;
        }
        Ok(())
    }

    /// Number of modules in the chain
    pub fn device_count(&self) -> usize {
        self.devices
    }

    /// Release the bus, pin and delay
    pub fn release(self) -> (SPI, CS, D) {
        (self.spi, self.cs, self.delay)
    }

    fn transmit(&mut self, frame: &[u8]) -> Result<(), Max7219Error<SPI::Error, CS::Error>> {
        self.cs.set_low().map_err(Max7219Error::Pin)?;
        let result = self.spi.write(frame).and_then(|()| self.spi.flush());
        // CS must go high even after a bus error, or the chain stays selected
        self.cs.set_high().map_err(Max7219Error::Pin)?;
        result.map_err(Max7219Error::Spi)
    }
}

impl<SPI, CS, D> MatrixDevice for Max7219<SPI, CS, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    D: DelayNs,
{
    type Error = Max7219Error<SPI::Error, CS::Error>;

    fn device_count(&self) -> usize {
        self.devices
    }

    fn commit(&mut self, framebuffer: &Framebuffer) -> Result<(), Self::Error> {
        self.commit_framebuffer(framebuffer)
    }

    fn set_intensity(&mut self, level: u8) -> Result<(), Self::Error> {
        Max7219::set_intensity(self, level)
    }
}
