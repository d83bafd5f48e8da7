use crate::{Ili9341, Interface, Outcome};

impl<IFACE, RESET> Ili9341<IFACE, RESET>
where
    IFACE: Interface,
{
    /// Draw a single pixel
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: u16) -> Result<(), IFACE::Error> {
        self.set_address_window(x, y, x, y)?;
        self.interface.write_data(&color.to_be_bytes())
    }

    /// Fills the `w`×`h` rectangle whose top left corner is (x, y).
    ///
    /// The rectangle is clipped to the frame. Nothing is drawn when it has no
    /// area or when (x, y) is off screen; the returned [`Outcome`] says which.
    pub fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: u16,
    ) -> Result<Outcome, IFACE::Error> {
        match self.clip(x, y, w, h) {
            Ok((w, h)) => {
                self.fill_rect_fast(x, y, w, h, color)?;
                Ok(Outcome::Complete)
            }
            Err(outcome) => Ok(outcome),
        }
    }

    /// Same as [`Ili9341::fill_rect`] without bounds checking
    pub fn fill_rect_fast(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: u16,
    ) -> Result<(), IFACE::Error> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        self.set_address_window(x, y, x.saturating_add(w - 1), y.saturating_add(h - 1))?;
        self.fill_color(color, u32::from(w) * u32::from(h))
    }

    /// Draws the one pixel wide border of the `w`×`h` rectangle at (x, y).
    ///
    /// Clipped like [`Ili9341::fill_rect`]; a clipped side is drawn along the
    /// frame edge.
    pub fn draw_rectangle(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: u16,
    ) -> Result<Outcome, IFACE::Error> {
        let (w, h) = match self.clip(x, y, w, h) {
            Ok(extent) => extent,
            Err(outcome) => return Ok(outcome),
        };
        let right = x + w - 1;
        let bottom = y + h - 1;

        self.draw_fast_hline(x, y, right, 1, color)?;
        self.draw_fast_hline(x, bottom, right, 1, color)?;
        self.draw_fast_vline(x, y, bottom, 1, color)?;
        self.draw_fast_vline(right, y, bottom, 1, color)?;
        Ok(Outcome::Complete)
    }

    /// Draw a line between any two points, `width` pixels thick.
    ///
    /// Horizontal and vertical lines take a single window. Everything else
    /// uses Bresenham's algorithm and stamps a `width`×`width` block at every
    /// step. Pixels falling off the frame are clipped.
    pub fn draw_line(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        width: u16,
        color: u16,
    ) -> Result<(), IFACE::Error> {
        if width == 0 {
            return Ok(());
        }

        if x0 == x1 {
            let (top, bottom) = ordered(y0, y1);
            self.fill_rect(x0, top, width, (bottom - top).saturating_add(1), color)?;
        } else if y0 == y1 {
            let (left, right) = ordered(x0, x1);
            self.fill_rect(left, y0, (right - left).saturating_add(1), width, color)?;
        } else if y0.abs_diff(y1) < x0.abs_diff(x1) {
            if x0 > x1 {
                self.plot_line_low(x1, y1, x0, y0, width, color)?;
            } else {
                self.plot_line_low(x0, y0, x1, y1, width, color)?;
            }
        } else if y0 > y1 {
            self.plot_line_high(x1, y1, x0, y0, width, color)?;
        } else {
            self.plot_line_high(x0, y0, x1, y1, width, color)?;
        }
        Ok(())
    }

    /// Draw a horizontal line from x0 to x1 with a single window.
    ///
    /// The line grows downwards from `y` when `width` is more than one.
    /// No bounds checking.
    pub fn draw_fast_hline(
        &mut self,
        x0: u16,
        y: u16,
        x1: u16,
        width: u16,
        color: u16,
    ) -> Result<(), IFACE::Error> {
        if width == 0 {
            return Ok(());
        }
        let (left, right) = ordered(x0, x1);
        self.set_address_window(left, y, right, y.saturating_add(width - 1))?;
        self.fill_color(color, u32::from(width) * (u32::from(right - left) + 1))
    }

    /// Draw a vertical line from y0 to y1 with a single window.
    ///
    /// The line grows to the right of `x` when `width` is more than one.
    /// No bounds checking.
    pub fn draw_fast_vline(
        &mut self,
        x: u16,
        y0: u16,
        y1: u16,
        width: u16,
        color: u16,
    ) -> Result<(), IFACE::Error> {
        if width == 0 {
            return Ok(());
        }
        let (top, bottom) = ordered(y0, y1);
        self.set_address_window(x, top, x.saturating_add(width - 1), bottom)?;
        self.fill_color(color, u32::from(width) * (u32::from(bottom - top) + 1))
    }

    /// Shallow lines, |dy| < |dx|. Expects x0 <= x1.
    pub(crate) fn plot_line_low(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        width: u16,
        color: u16,
    ) -> Result<(), IFACE::Error> {
        let dx = i32::from(x1) - i32::from(x0);
        let mut dy = i32::from(y1) - i32::from(y0);
        let mut yi = 1;
        if dy < 0 {
            yi = -1;
            dy = -dy;
        }

        let mut d = 2 * dy - dx;
        let mut y = i32::from(y0);
        for x in x0..=x1 {
            self.stamp(x, y as u16, width, color)?;
            if d > 0 {
                y += yi;
                d -= 2 * dx;
            }
            d += 2 * dy;
        }
        Ok(())
    }

    /// Steep lines, |dy| >= |dx|. Expects y0 <= y1.
    pub(crate) fn plot_line_high(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        width: u16,
        color: u16,
    ) -> Result<(), IFACE::Error> {
        let mut dx = i32::from(x1) - i32::from(x0);
        let dy = i32::from(y1) - i32::from(y0);
        let mut xi = 1;
        if dx < 0 {
            xi = -1;
            dx = -dx;
        }

        let mut d = 2 * dx - dy;
        let mut x = i32::from(x0);
        for y in y0..=y1 {
            self.stamp(x as u16, y, width, color)?;
            if d > 0 {
                x += xi;
                d -= 2 * dy;
            }
            d += 2 * dx;
        }
        Ok(())
    }

    /// One line sample: a `width`×`width` block with (x, y) as top left
    fn stamp(&mut self, x: u16, y: u16, width: u16, color: u16) -> Result<(), IFACE::Error> {
        self.fill_rect(x, y, width, width, color).map(|_| ())
    }

    /// Clips a rectangle to the frame, returning the visible width and height
    pub(crate) fn clip(&self, x: u16, y: u16, w: u16, h: u16) -> Result<(u16, u16), Outcome> {
        if w == 0 || h == 0 {
            return Err(Outcome::ZeroExtent);
        }
        if x >= self.width || y >= self.height {
            return Err(Outcome::OutOfBounds);
        }
        Ok((w.min(self.width - x), h.min(self.height - y)))
    }
}

fn ordered(a: u16, b: u16) -> (u16, u16) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}
