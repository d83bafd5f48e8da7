use crate::{Ili9341, Interface};

/// Pixels pushed per batch by the fill engine
const BLOCK_PIXELS: u32 = 64;
const BLOCK_BYTES: usize = BLOCK_PIXELS as usize * 2;

impl<IFACE, RESET> Ili9341<IFACE, RESET>
where
    IFACE: Interface,
{
    /// Writes `count` pixels of `color` into the window opened last.
    ///
    /// The first pixel is sent normally. When both bytes of the colour are
    /// equal the remaining pixels only re-latch the data already on the bus
    /// (see [`Interface::strobe`]), which makes solid fills of colours like
    /// black or white much cheaper on a parallel bus. Other colours are sent
    /// in 64-pixel bursts.
    ///
    /// The window must span exactly `count` pixels for the next drawing call
    /// to start at its own origin. A `count` of 0 sends nothing.
    pub fn fill_color(&mut self, color: u16, count: u32) -> Result<(), IFACE::Error> {
        self.stream_color(color, count, true)
    }

    pub(crate) fn stream_color(
        &mut self,
        color: u16,
        count: u32,
        latch: bool,
    ) -> Result<(), IFACE::Error> {
        if count == 0 {
            return Ok(());
        }
        let [high, low] = color.to_be_bytes();
        self.interface.write_data(&[high, low])?;

        let remaining = count - 1;
        let blocks = remaining / BLOCK_PIXELS;
        let rest = (remaining % BLOCK_PIXELS) as usize * 2;

        if latch && high == low {
            for _ in 0..blocks {
                self.interface.strobe(BLOCK_BYTES)?;
            }
            if rest > 0 {
                self.interface.strobe(rest)?;
            }
        } else {
            let mut block = [0u8; BLOCK_BYTES];
            for pair in block.chunks_exact_mut(2) {
                pair[0] = high;
                pair[1] = low;
            }
            for _ in 0..blocks {
                self.interface.write_data(&block)?;
            }
            if rest > 0 {
                self.interface.write_data(&block[..rest])?;
            }
        }
        Ok(())
    }

    /// Fill the whole screen with a color
    pub fn fill_screen(&mut self, color: u16) -> Result<(), IFACE::Error> {
        self.set_address_window(0, 0, self.width - 1, self.height - 1)?;
        self.fill_color(color, u32::from(self.width) * u32::from(self.height))
    }
}
