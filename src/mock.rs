//! Host-side doubles: a simulated panel that decodes the window/pixel
//! protocol, plus reset pin and delay recorders.

use core::convert::Infallible;
use std::collections::{BTreeSet, HashMap};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::{DisplaySize320x240, Ili9341, Interface};

const CASET: u8 = 0x2a;
const PASET: u8 = 0x2b;
const RAMWR: u8 = 0x2c;

#[derive(Default)]
pub struct Pin {
    pub levels: Vec<bool>,
}

impl ErrorType for Pin {
    type Error = Infallible;
}

impl OutputPin for Pin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.push(true);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingDelay {
    pub delays_ms: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}

/// Simulated controller.
///
/// Commands are recorded with their parameters. After a Memory Write every
/// byte pair is a pixel placed at the cursor, which walks the last column and
/// page ranges row by row like the real controller.
#[derive(Default)]
pub struct Panel {
    pub commands: Vec<(u8, Vec<u8>)>,
    /// Every pixel word streamed, in order
    pub stream: Vec<u16>,
    /// Windows a Memory Write was issued for, as (x1, y1, x2, y2)
    pub windows: Vec<(u16, u16, u16, u16)>,
    /// Last colour written at each position
    pub pixels: HashMap<(u16, u16), u16>,
    /// Bytes produced by `strobe` instead of `write_data`
    pub strobed: usize,
    columns: (u16, u16),
    pages: (u16, u16),
    cursor: (u16, u16),
    writing: bool,
    pending: Option<u8>,
    last: u8,
}

impl Panel {
    /// Forgets everything recorded so far, keeping the address ranges
    pub fn clear_log(&mut self) {
        self.commands.clear();
        self.stream.clear();
        self.windows.clear();
        self.pixels.clear();
        self.strobed = 0;
    }

    /// Parameters of the last occurrence of `command`
    pub fn args(&self, command: u8) -> Vec<u8> {
        self.commands
            .iter()
            .rev()
            .find(|(c, _)| *c == command)
            .map(|(_, args)| args.clone())
            .unwrap_or_default()
    }

    pub fn drawn(&self) -> BTreeSet<(u16, u16)> {
        self.pixels.keys().copied().collect()
    }

    pub fn drawn_with(&self, color: u16) -> BTreeSet<(u16, u16)> {
        self.pixels
            .iter()
            .filter(|(_, c)| **c == color)
            .map(|(p, _)| *p)
            .collect()
    }

    fn decode_range(args: &[u8]) -> Option<(u16, u16)> {
        match *args {
            [a, b, c, d] => Some((u16::from_be_bytes([a, b]), u16::from_be_bytes([c, d]))),
            _ => None,
        }
    }

    fn settle_previous(&mut self) {
        if let Some((command, args)) = self.commands.last() {
            let range = Self::decode_range(args);
            match (*command, range) {
                (CASET, Some(range)) => self.columns = range,
                (PASET, Some(range)) => self.pages = range,
                _ => {}
            }
        }
    }

    fn byte(&mut self, byte: u8) {
        self.last = byte;
        if !self.writing {
            if let Some((_, args)) = self.commands.last_mut() {
                args.push(byte);
            }
            return;
        }
        match self.pending.take() {
            None => self.pending = Some(byte),
            Some(high) => {
                let word = u16::from_be_bytes([high, byte]);
                self.stream.push(word);
                self.pixels.insert(self.cursor, word);
                self.cursor.0 += 1;
                if self.cursor.0 > self.columns.1 {
                    self.cursor.0 = self.columns.0;
                    self.cursor.1 += 1;
                }
            }
        }
    }
}

impl Interface for Panel {
    type Error = Infallible;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.settle_previous();
        self.commands.push((command, Vec::new()));
        self.writing = command == RAMWR;
        self.pending = None;
        if self.writing {
            self.cursor = (self.columns.0, self.pages.0);
            self.windows
                .push((self.columns.0, self.pages.0, self.columns.1, self.pages.1));
        }
        Ok(())
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        for &byte in data {
            self.byte(byte);
        }
        Ok(())
    }

    fn strobe(&mut self, count: usize) -> Result<(), Self::Error> {
        self.strobed += count;
        for _ in 0..count {
            self.byte(self.last);
        }
        Ok(())
    }
}

/// A 320x240 driver over a fresh panel with the init traffic cleared
pub fn display() -> Ili9341<Panel, Pin> {
    let mut display = Ili9341::new(
        Panel::default(),
        Pin::default(),
        &mut RecordingDelay::default(),
        DisplaySize320x240,
    )
    .unwrap();
    display.interface.clear_log();
    display
}

/// Every position of the inclusive rectangle (x1, y1)..(x2, y2)
pub fn area(x1: u16, y1: u16, x2: u16, y2: u16) -> BTreeSet<(u16, u16)> {
    (y1..=y2)
        .flat_map(|y| (x1..=x2).map(move |x| (x, y)))
        .collect()
}
