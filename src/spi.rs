use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{Mode, Phase, Polarity, SpiDevice};
use crate::{Interface, Error};

/// SPI mode
pub const MODE: Mode = Mode {
    polarity: Polarity::IdleLow,
    phase: Phase::CaptureOnFirstTransition,
};

/// Bytes collected before each SPI transfer when streaming pixels
const BURST_BYTES: usize = 64;

/// `Interface` implementation for SPI interfaces
///
/// Chip select is handled by the `SpiDevice`. Pixel words and strobes are
/// packed into fixed bursts so a DMA-backed device moves them in large
/// transfers; every transfer still completes before the call returns.
pub struct SpiInterface<SPI, DC> {
    spi: SPI,
    dc: DC,
    last: u8,
}

impl<SPI, DC> SpiInterface<SPI, DC>
    where SPI: SpiDevice,
          DC: OutputPin,
{
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self {
            spi,
            dc,
            last: 0,
        }
    }

    /// Releases the SPI device and the D/C pin
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC> Interface for SpiInterface<SPI, DC>
    where SPI: SpiDevice,
          DC: OutputPin,
{
    type Error = Error<SPI::Error, DC::Error>;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.dc.set_low().map_err(Error::OutputPin)?;
        self.spi.write(&[command]).map_err(Error::Interface)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let last = match data.last() {
            Some(&last) => last,
            None => return Ok(()),
        };
        self.dc.set_high().map_err(Error::OutputPin)?;
        self.spi.write(data).map_err(Error::Interface)?;
        self.last = last;
        Ok(())
    }

    fn strobe(&mut self, count: usize) -> Result<(), Self::Error> {
        self.dc.set_high().map_err(Error::OutputPin)?;
        let burst = [self.last; BURST_BYTES];
        let mut remaining = count;
        while remaining > 0 {
            let len = remaining.min(BURST_BYTES);
            self.spi.write(&burst[..len]).map_err(Error::Interface)?;
            remaining -= len;
        }
        Ok(())
    }

    fn write_words(&mut self, data: impl IntoIterator<Item = u16>) -> Result<(), Self::Error> {
        self.dc.set_high().map_err(Error::OutputPin)?;
        let mut burst = [0u8; BURST_BYTES];
        let mut len = 0;
        for w in data.into_iter() {
            burst[len..len + 2].copy_from_slice(&w.to_be_bytes());
            len += 2;
            if len == BURST_BYTES {
                self.spi.write(&burst).map_err(Error::Interface)?;
                self.last = burst[len - 1];
                len = 0;
            }
        }
        if len > 0 {
            self.spi.write(&burst[..len]).map_err(Error::Interface)?;
            self.last = burst[len - 1];
        }
        Ok(())
    }
}
