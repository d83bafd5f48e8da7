use crate::{Ili9341, Interface, Outcome};

/// A row-major RGB565 image
#[derive(Clone, Copy, Debug)]
pub struct Bitmap<'a> {
    pub data: &'a [u16],
    pub width: u16,
    pub height: u16,
}

impl<'a> Bitmap<'a> {
    pub const fn new(data: &'a [u16], width: u16, height: u16) -> Self {
        Self {
            data,
            width,
            height,
        }
    }
}

impl<IFACE, RESET> Ili9341<IFACE, RESET>
where
    IFACE: Interface,
{
    /// Draws `bitmap` with its top left corner at (x, y).
    ///
    /// Parts of the image beyond the right or bottom edge are not sent. If
    /// the data holds fewer than width×height pixels only the available ones
    /// are streamed.
    pub fn draw_bitmap(
        &mut self,
        x: u16,
        y: u16,
        bitmap: &Bitmap<'_>,
    ) -> Result<Outcome, IFACE::Error> {
        let (w, h) = match self.clip(x, y, bitmap.width, bitmap.height) {
            Ok(extent) => extent,
            Err(outcome) => return Ok(outcome),
        };
        self.set_address_window(x, y, x + w - 1, y + h - 1)?;

        if w == bitmap.width {
            let len = (usize::from(w) * usize::from(h)).min(bitmap.data.len());
            self.interface.write_words(bitmap.data[..len].iter().copied())?;
        } else {
            for row in bitmap
                .data
                .chunks(usize::from(bitmap.width))
                .take(usize::from(h))
            {
                self.interface
                    .write_words(row.iter().take(usize::from(w)).copied())?;
            }
        }
        Ok(Outcome::Complete)
    }

    /// Draw a rectangle on the screen, represented by top-left corner (x0, y0)
    /// and bottom-right corner (x1, y1).
    ///
    /// The border is included.
    ///
    /// This method accepts an iterator of rgb565 pixel values.
    ///
    /// The iterator is useful to avoid wasting memory by holding a buffer for
    /// the whole screen when it is not necessary.
    pub fn draw_raw_iter<I: IntoIterator<Item = u16>>(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        data: I,
    ) -> Result<(), IFACE::Error> {
        self.set_address_window(x0, y0, x1, y1)?;
        self.interface.write_words(data)
    }

    /// Draw a rectangle on the screen, represented by top-left corner (x0, y0)
    /// and bottom-right corner (x1, y1).
    ///
    /// The border is included.
    ///
    /// This method accepts a raw buffer of words that will be copied to the screen
    /// video memory.
    ///
    /// The expected format is rgb565.
    pub fn draw_raw_slice(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        data: &[u16],
    ) -> Result<(), IFACE::Error> {
        self.draw_raw_iter(x0, y0, x1, y1, data.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{self, area};

    fn gradient(width: u16, height: u16) -> Vec<u16> {
        (0..width * height).collect()
    }

    #[test]
    fn streams_whole_bitmap_in_row_order() {
        let data = gradient(4, 3);
        let mut display = mock::display();
        let outcome = display.draw_bitmap(10, 20, &Bitmap::new(&data, 4, 3)).unwrap();

        assert_eq!(outcome, Outcome::Complete);
        let panel = &display.interface;
        assert_eq!(panel.windows, [(10, 20, 13, 22)]);
        assert_eq!(panel.stream, data);
        assert_eq!(panel.pixels[&(13, 20)], 3);
        assert_eq!(panel.pixels[&(10, 21)], 4);
        assert_eq!(panel.pixels[&(13, 22)], 11);
    }

    #[test]
    fn clips_right_and_bottom_edges() {
        let data = gradient(5, 4);
        let mut display = mock::display();
        display.draw_bitmap(317, 237, &Bitmap::new(&data, 5, 4)).unwrap();

        let panel = &display.interface;
        assert_eq!(panel.windows, [(317, 237, 319, 239)]);
        assert_eq!(panel.stream, [0, 1, 2, 5, 6, 7, 10, 11, 12]);
        assert_eq!(panel.drawn(), area(317, 237, 319, 239));
    }

    #[test]
    fn rejects_bad_geometry() {
        let data = gradient(2, 2);
        let mut display = mock::display();

        assert_eq!(
            display.draw_bitmap(320, 0, &Bitmap::new(&data, 2, 2)).unwrap(),
            Outcome::OutOfBounds
        );
        assert_eq!(
            display.draw_bitmap(0, 0, &Bitmap::new(&data, 0, 2)).unwrap(),
            Outcome::ZeroExtent
        );
        assert!(display.interface.commands.is_empty());
    }

    #[test]
    fn short_data_streams_what_exists() {
        let data = gradient(3, 1);
        let mut display = mock::display();
        display.draw_bitmap(0, 0, &Bitmap::new(&data, 3, 2)).unwrap();

        assert_eq!(display.interface.stream, [0, 1, 2]);
    }

    #[test]
    fn raw_slice_fills_window() {
        let mut display = mock::display();
        display.draw_raw_slice(1, 1, 2, 2, &[9, 8, 7, 6]).unwrap();

        let panel = &display.interface;
        assert_eq!(panel.pixels[&(1, 1)], 9);
        assert_eq!(panel.pixels[&(2, 1)], 8);
        assert_eq!(panel.pixels[&(1, 2)], 7);
        assert_eq!(panel.pixels[&(2, 2)], 6);
    }
}
