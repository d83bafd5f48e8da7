use crate::{Ili9341, Interface};
use embedded_graphics_core::{
    pixelcolor::{IntoStorage, Rgb565},
    prelude::*,
    primitives::Rectangle,
};

impl<IFACE, RESET> OriginDimensions for Ili9341<IFACE, RESET> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl<IFACE, RESET> DrawTarget for Ili9341<IFACE, RESET>
where
    IFACE: Interface,
{
    type Error = IFACE::Error;

    type Color = Rgb565;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                self.draw_pixel(point.x as u16, point.y as u16, color.into_storage())?;
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let drawable_area = area.intersection(&self.bounding_box());

        if let Some(drawable_bottom_right) = drawable_area.bottom_right() {
            let x0 = drawable_area.top_left.x as u16;
            let y0 = drawable_area.top_left.y as u16;
            let x1 = drawable_bottom_right.x as u16;
            let y1 = drawable_bottom_right.y as u16;

            if area == &drawable_area {
                // All pixels are on screen
                self.draw_raw_iter(
                    x0,
                    y0,
                    x1,
                    y1,
                    area.points()
                        .zip(colors)
                        .map(|(_, color)| color.into_storage()),
                )
            } else {
                // Some pixels are on screen
                self.draw_raw_iter(
                    x0,
                    y0,
                    x1,
                    y1,
                    area.points()
                        .zip(colors)
                        .filter(|(point, _)| drawable_area.contains(*point))
                        .map(|(_, color)| color.into_storage()),
                )
            }
        } else {
            // No pixels are on screen
            Ok(())
        }
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());

        if drawable_area.bottom_right().is_some() {
            self.fill_rect_fast(
                drawable_area.top_left.x as u16,
                drawable_area.top_left.y as u16,
                drawable_area.size.width as u16,
                drawable_area.size.height as u16,
                color.into_storage(),
            )
        } else {
            Ok(())
        }
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(color.into_storage())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_core::{
        pixelcolor::{raw::RawU16, Rgb565, RgbColor},
        prelude::*,
        primitives::Rectangle,
    };

    use crate::mock::{self, area};

    #[test]
    fn size_follows_orientation() {
        let mut display = mock::display();
        assert_eq!(display.size(), Size::new(320, 240));

        display.rotate(1).unwrap();
        assert_eq!(display.size(), Size::new(240, 320));
    }

    #[test]
    fn pixels_outside_frame_are_dropped() {
        let mut display = mock::display();
        display
            .draw_iter([
                Pixel(Point::new(5, 6), Rgb565::RED),
                Pixel(Point::new(-1, 6), Rgb565::RED),
                Pixel(Point::new(320, 0), Rgb565::RED),
            ])
            .unwrap();

        assert_eq!(display.interface.drawn(), area(5, 6, 5, 6));
        assert_eq!(display.interface.pixels[&(5, 6)], 0xf800);
    }

    #[test]
    fn contiguous_fill_is_clipped() {
        let mut display = mock::display();
        let rect = Rectangle::new(Point::new(-1, -1), Size::new(3, 3));
        let colors = (0..9u16).map(|i| Rgb565::from(RawU16::new(i)));
        display.fill_contiguous(&rect, colors).unwrap();

        let panel = &display.interface;
        assert_eq!(panel.windows, [(0, 0, 1, 1)]);
        assert_eq!(panel.stream, [4, 5, 7, 8]);
    }

    #[test]
    fn solid_fill_uses_fill_engine() {
        let mut display = mock::display();
        display
            .fill_solid(&Rectangle::new(Point::new(310, 230), Size::new(20, 20)), Rgb565::WHITE)
            .unwrap();

        let panel = &display.interface;
        assert_eq!(panel.drawn_with(0xffff), area(310, 230, 319, 239));
        assert!(panel.strobed > 0);
    }

    #[test]
    fn clear_fills_screen() {
        let mut display = mock::display();
        display.clear(Rgb565::BLACK).unwrap();

        assert_eq!(display.interface.drawn().len(), 320 * 240);
    }
}
