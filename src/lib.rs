#![cfg_attr(not(test), no_std)]

//! ILI9341 rendering driver
//!
//! ### Usage
//!
//! To control the display you need to set up:
//!
//! * A bus implementing [`Interface`]: the 8-bit parallel [`gpio::Gpio8Interface`],
//!   the [`spi::SpiInterface`], or any `display-interface` bus wrapped in
//!   [`adapter::DisplayInterface`]
//! * A reset pin and a delay for the power-on sequence
//!
//! ```ignore
//! let iface = ili9341_render::spi::SpiInterface::new(spi_device, dc);
//!
//! let mut display = Ili9341::new(iface, reset, &mut delay, DisplaySize320x240).unwrap();
//!
//! display.fill_screen(color::CYAN).unwrap();
//! display.draw_line(4, 18, 200, 150, 1, color::RED).unwrap();
//! display.draw_text(10, 40, "Hello world", color::WHITE, &FONT).unwrap();
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

#[macro_use]
mod fmt;

pub mod adapter;
mod bitmap;
pub mod color;
mod fill;
pub mod font;
pub mod gpio;
mod init;
mod primitives;
pub mod spi;
mod text;

#[cfg(feature = "graphics")]
mod graphics_core;

#[cfg(test)]
mod mock;

pub use bitmap::Bitmap;
pub use font::{Font, FontChar, Glyph, GlyphData};
pub use text::TextStyle;

/// Trait representing the interface to the hardware.
///
/// Intended to abstract the various buses (SPI, MPU 8-bit parallel) from the
/// rendering code. Every call blocks until its bytes have been clocked out.
pub trait Interface {
    type Error;

    /// Sends a single command byte (D/C low)
    fn write_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Sends parameter or pixel bytes (D/C high)
    ///
    /// This is also the bulk burst primitive: implementations should push the
    /// whole slice in as few bus transactions as they can.
    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Latches the last data byte again, `count` more times.
    ///
    /// On a parallel bus the data lines still hold the previous byte, so only
    /// the write strobe needs to be pulsed. Serial buses resend the byte.
    fn strobe(&mut self, count: usize) -> Result<(), Self::Error>;

    /// Sends a command with a sequence of 8-bit arguments
    ///
    /// Mostly used for sending configuration commands
    fn write(&mut self, command: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.write_command(command)?;
        if data.is_empty() {
            return Ok(());
        }
        self.write_data(data)
    }

    /// Sends a sequence of 16-bit pixel words, most significant byte first
    fn write_words(&mut self, data: impl IntoIterator<Item = u16>) -> Result<(), Self::Error> {
        for word in data {
            self.write_data(&word.to_be_bytes())?;
        }
        Ok(())
    }
}

/// Trait that defines display size information
///
/// The size is the active frame in [`Orientation::Landscape`], the
/// orientation the panel is left in after initialization.
pub trait DisplaySize {
    /// Width in pixels
    const WIDTH: u16;
    /// Height in pixels
    const HEIGHT: u16;
}

/// Generic display size of 320x240 pixels
pub struct DisplaySize320x240;

impl DisplaySize for DisplaySize320x240 {
    const WIDTH: u16 = 320;
    const HEIGHT: u16 = 240;
}

/// Generic display size of 240x320 pixels
pub struct DisplaySize240x320;

impl DisplaySize for DisplaySize240x320 {
    const WIDTH: u16 = 240;
    const HEIGHT: u16 = 320;
}

/// Errors raised while bringing up a bus or the driver.
///
/// `Interface` wraps the bus (or SPI peripheral) error, `OutputPin` the error
/// of a control pin.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<IfaceE, PinE> {
    Interface(IfaceE),
    OutputPin(PinE),
}

/// What a bounds-checked drawing call actually did.
///
/// Geometry problems are never reported as errors: the call clips or skips
/// and says so here. Ignoring the value keeps the silent behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Everything requested (after clipping) was drawn
    Complete,
    /// The origin lies outside the frame, or text ran off the bottom
    OutOfBounds,
    /// A character had no glyph in the font; the rest of the string was skipped
    GlyphNotFound,
    /// Width or height was zero
    ZeroExtent,
}

/// Panel orientations, numbered like the `rotate` modes 0 to 3.
///
/// `Landscape` is the power-on orientation. `Portrait` and `PortraitFlipped`
/// exchange the width and height given by the [`DisplaySize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    Landscape,
    Portrait,
    LandscapeFlipped,
    PortraitFlipped,
}

impl Orientation {
    /// Maps a rotation mode (0..=3) to an orientation
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Landscape),
            1 => Some(Self::Portrait),
            2 => Some(Self::LandscapeFlipped),
            3 => Some(Self::PortraitFlipped),
            _ => None,
        }
    }

    /// Memory access control (MADCTL) argument for this orientation
    pub fn madctl(self) -> u8 {
        match self {
            // MX
            Self::Landscape => 0x40,
            // MV
            Self::Portrait => 0x20,
            // MY
            Self::LandscapeFlipped => 0x80,
            // MX | MY | MV
            Self::PortraitFlipped => 0xE0,
        }
    }

    fn is_swapped(self) -> bool {
        match self {
            Self::Portrait | Self::PortraitFlipped => true,
            Self::Landscape | Self::LandscapeFlipped => false,
        }
    }
}

/// Delays used by the reset and power-on sequence, in milliseconds.
///
/// The defaults are the values the ILI9341 datasheet asks for with some
/// margin; panels that wake up faster can shorten them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Reset held high before the reset pulse
    pub reset_settle_ms: u32,
    /// Length of the low reset pulse
    pub reset_pulse_ms: u32,
    /// Wait after releasing reset before the first command
    pub reset_recovery_ms: u32,
    /// Wait after Sleep Out
    pub sleep_out_ms: u32,
    /// Wait after Display On
    pub display_on_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            reset_settle_ms: 5,
            reset_pulse_ms: 20,
            reset_recovery_ms: 150,
            sleep_out_ms: 150,
            display_on_ms: 150,
        }
    }
}

/// The hardware makes it efficient to draw rectangles on the screen.
///
/// What happens is the following:
///
/// - A drawing window is prepared (with the 2 opposite corner coordinates)
/// - The starting point for drawing is the top left corner of this window
/// - Every pair of bytes received is intepreted as a pixel value in rgb565
/// - As soon as a pixel is received, an internal counter is incremented,
///   and the next word will fill the next pixel (the adjacent on the right, or
///   the first of the next row if the row ended)
///
/// Every primitive in this crate opens its own window and then streams pixels
/// into it, either with the fill engine ([`Ili9341::fill_color`]) or as raw
/// words.
pub struct Ili9341<IFACE, RESET> {
    interface: IFACE,
    reset: RESET,
    width: u16,
    height: u16,
    orientation: Orientation,
    timing: Timing,
}

impl<IFACE, RESET> Ili9341<IFACE, RESET>
where
    IFACE: Interface,
    RESET: OutputPin,
{
    /// Resets and initializes the panel with the default [`Timing`].
    ///
    /// The display is left on, in [`Orientation::Landscape`].
    pub fn new<DELAY, SIZE>(
        interface: IFACE,
        reset: RESET,
        delay: &mut DELAY,
        display_size: SIZE,
    ) -> Result<Self, Error<IFACE::Error, RESET::Error>>
    where
        DELAY: DelayNs,
        SIZE: DisplaySize,
    {
        Self::new_with_timing(interface, reset, delay, display_size, Timing::default())
    }

    /// Same as [`Ili9341::new`] with explicit reset and power-on delays
    pub fn new_with_timing<DELAY, SIZE>(
        interface: IFACE,
        reset: RESET,
        delay: &mut DELAY,
        _display_size: SIZE,
        timing: Timing,
    ) -> Result<Self, Error<IFACE::Error, RESET::Error>>
    where
        DELAY: DelayNs,
        SIZE: DisplaySize,
    {
        let mut ili9341 = Ili9341 {
            interface,
            reset,
            width: SIZE::WIDTH,
            height: SIZE::HEIGHT,
            orientation: Orientation::Landscape,
            timing,
        };

        ili9341.hard_reset(delay)?;
        ili9341.init(delay).map_err(Error::Interface)?;

        Ok(ili9341)
    }
}

impl<IFACE, RESET> Ili9341<IFACE, RESET>
where
    IFACE: Interface,
{
    /// Opens the drawing window with corners (x1, y1) and (x2, y2), inclusive.
    ///
    /// Sends the column range, the page range and then Memory Write, so the
    /// controller expects pixel words afterwards. The coordinates are not
    /// checked against the frame.
    ///
    /// To fill the same area many times, open it once and call
    /// [`Ili9341::fill_color`] repeatedly.
    pub fn set_address_window(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
    ) -> Result<(), IFACE::Error> {
        self.interface
            .write(Command::ColumnAddressSet as u8, &range_bytes(x1, x2))?;
        self.interface
            .write(Command::PageAddressSet as u8, &range_bytes(y1, y2))?;
        self.interface.write_command(Command::MemoryWrite as u8)
    }

    /// Change the orientation of the screen
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), IFACE::Error> {
        self.interface.write(
            Command::MemoryAccessControl as u8,
            &[orientation.madctl()],
        )?;
        if self.orientation.is_swapped() ^ orientation.is_swapped() {
            core::mem::swap(&mut self.height, &mut self.width);
        }
        self.orientation = orientation;
        debug!("ili9341: orientation {}x{}", self.width, self.height);
        Ok(())
    }

    /// Change the orientation by rotation mode 0 to 3.
    ///
    /// Any other value is ignored and nothing is sent.
    pub fn rotate(&mut self, mode: u8) -> Result<(), IFACE::Error> {
        match Orientation::from_index(mode) {
            Some(orientation) => self.set_orientation(orientation),
            None => Ok(()),
        }
    }

    /// Get the current orientation
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Get the current screen width. It can change based on the current orientation
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Get the current screen height. It can change based on the current orientation
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Releases the bus and the reset pin
    pub fn release(self) -> (IFACE, RESET) {
        (self.interface, self.reset)
    }
}

fn range_bytes(start: u16, end: u16) -> [u8; 4] {
    let [start_high, start_low] = start.to_be_bytes();
    let [end_high, end_low] = end.to_be_bytes();
    [start_high, start_low, end_high, end_low]
}

#[derive(Clone, Copy)]
enum Command {
    MemoryAccessControl = 0x36,
    PixelFormatSet = 0x3a,
    SleepOut = 0x11,
    GammaSet = 0x26,
    DisplayOn = 0x29,
    ColumnAddressSet = 0x2a,
    PageAddressSet = 0x2b,
    MemoryWrite = 0x2c,
    FrameRateControl = 0xb1,
    DisplayFunctionControl = 0xb6,
    PowerControl1 = 0xc0,
    PowerControl2 = 0xc1,
    VcomControl1 = 0xc5,
    VcomControl2 = 0xc7,
    PositiveGammaCorrection = 0xe0,
    NegativeGammaCorrection = 0xe1,
}
