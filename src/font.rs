//! Bit-packed monochrome glyphs and the fonts built from them.
//!
//! Glyph bitmaps are stored column by column: each column is read top to
//! bottom from the most significant bit of a sample unit, and every column
//! starts on a fresh unit. Glyphs are taller than they are wide, so this
//! wastes fewer padding bits than storing rows. A clear bit is ink, a set
//! bit is background.

use crate::{Ili9341, Interface};

/// Packed glyph bits, in 8-bit or 16-bit sample units
#[derive(Clone, Copy, Debug)]
pub enum GlyphData<'a> {
    Bytes(&'a [u8]),
    Words(&'a [u16]),
}

impl GlyphData<'_> {
    /// Bits per sample unit
    pub fn sample_width(&self) -> u8 {
        match self {
            Self::Bytes(_) => 8,
            Self::Words(_) => 16,
        }
    }

    fn unit(&self, index: usize) -> Option<u16> {
        match self {
            Self::Bytes(data) => data.get(index).map(|&byte| u16::from(byte)),
            Self::Words(data) => data.get(index).copied(),
        }
    }
}

/// One character's bitmap and metrics
#[derive(Clone, Copy, Debug)]
pub struct Glyph<'a> {
    pub data: GlyphData<'a>,
    pub width: u16,
    pub height: u16,
}

impl<'a> Glyph<'a> {
    pub const fn new(data: GlyphData<'a>, width: u16, height: u16) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// Decodes the glyph column by column.
    ///
    /// Yields `(column, row, ink)` for every pixel the data covers. Decoding
    /// stops early if the data is shorter than the metrics require.
    pub fn pixels(&self) -> GlyphPixels<'a> {
        GlyphPixels {
            data: self.data,
            width: self.width,
            height: self.height,
            column: 0,
            row: 0,
            next_unit: 0,
            unit: 0,
            mask: 0,
        }
    }
}

/// Iterator returned by [`Glyph::pixels`]
pub struct GlyphPixels<'a> {
    data: GlyphData<'a>,
    width: u16,
    height: u16,
    column: u16,
    row: u16,
    next_unit: usize,
    unit: u16,
    // 0 once the current unit is used up
    mask: u16,
}

impl Iterator for GlyphPixels<'_> {
    type Item = (u16, u16, bool);

    fn next(&mut self) -> Option<Self::Item> {
        if self.column >= self.width || self.height == 0 {
            return None;
        }
        if self.mask == 0 {
            self.unit = self.data.unit(self.next_unit)?;
            self.next_unit += 1;
            self.mask = 1 << (self.data.sample_width() - 1);
        }

        let pixel = (self.column, self.row, self.unit & self.mask == 0);
        self.mask >>= 1;
        self.row += 1;
        if self.row == self.height {
            // Leftover bits of the unit are padding
            self.row = 0;
            self.column += 1;
            self.mask = 0;
        }
        Some(pixel)
    }
}

/// A character code and its glyph
#[derive(Clone, Copy, Debug)]
pub struct FontChar<'a> {
    pub code: char,
    pub glyph: Glyph<'a>,
}

impl<'a> FontChar<'a> {
    pub const fn new(code: char, glyph: Glyph<'a>) -> Self {
        Self { code, glyph }
    }
}

/// An ordered glyph table.
///
/// Lookups scan the table in order and the first matching code wins. The
/// height of the first entry is used as the line height.
#[derive(Clone, Copy, Debug)]
pub struct Font<'a> {
    pub chars: &'a [FontChar<'a>],
}

impl<'a> Font<'a> {
    pub const fn new(chars: &'a [FontChar<'a>]) -> Self {
        Self { chars }
    }

    pub fn glyph(&self, code: char) -> Option<&Glyph<'a>> {
        self.chars
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| &entry.glyph)
    }

    /// Height of the first glyph, 0 for an empty font
    pub fn line_height(&self) -> u16 {
        self.chars.first().map_or(0, |entry| entry.glyph.height)
    }

    /// Sum of the glyph widths of `text`, without wrapping.
    ///
    /// Characters missing from the font count as zero.
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars()
            .filter_map(|code| self.glyph(code))
            .map(|glyph| u32::from(glyph.width))
            .sum()
    }
}

impl<IFACE, RESET> Ili9341<IFACE, RESET>
where
    IFACE: Interface,
{
    /// Renders one glyph with its top left corner at (x, y).
    ///
    /// Ink pixels are drawn in `fg`. Background pixels are drawn in `bg` when
    /// `opaque` is set and left untouched otherwise.
    pub fn draw_glyph(
        &mut self,
        x: u16,
        y: u16,
        fg: u16,
        bg: u16,
        glyph: &Glyph<'_>,
        opaque: bool,
    ) -> Result<(), IFACE::Error> {
        for (column, row, ink) in glyph.pixels() {
            let (px, py) = (x.saturating_add(column), y.saturating_add(row));
            if ink {
                self.draw_pixel(px, py, fg)?;
            } else if opaque {
                self.draw_pixel(px, py, bg)?;
            }
        }
        Ok(())
    }
}
