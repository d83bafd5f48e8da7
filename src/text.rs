use crate::font::Font;
use crate::{Ili9341, Interface, Outcome};

/// Font, colours and spacing for drawing strings
#[derive(Clone, Copy, Debug)]
pub struct TextStyle<'a> {
    pub font: &'a Font<'a>,
    pub fg: u16,
    pub bg: u16,
    /// Paint glyph backgrounds with `bg` instead of leaving them transparent
    pub opaque: bool,
    /// Extra pixels between characters
    pub x_padding: u16,
    /// Extra pixels between lines
    pub y_padding: u16,
}

impl<'a> TextStyle<'a> {
    /// Transparent text in `fg`
    pub fn new(font: &'a Font<'a>, fg: u16) -> Self {
        Self {
            font,
            fg,
            bg: 0,
            opaque: false,
            x_padding: 0,
            y_padding: 0,
        }
    }

    /// Text in `fg` on a solid `bg` background
    pub fn with_background(font: &'a Font<'a>, fg: u16, bg: u16) -> Self {
        Self {
            bg,
            opaque: true,
            ..Self::new(font, fg)
        }
    }

    pub fn padding(self, x_padding: u16, y_padding: u16) -> Self {
        Self {
            x_padding,
            y_padding,
            ..self
        }
    }
}

impl<IFACE, RESET> Ili9341<IFACE, RESET>
where
    IFACE: Interface,
{
    /// Draws `text` starting at (x, y).
    ///
    /// - `'\n'` returns to `x` and moves down one line (the height of the
    ///   font's first glyph).
    /// - `'\t'` moves right by four line heights.
    /// - A glyph that would cross the right edge wraps to the next line.
    ///
    /// Drawing stops at the first character missing from the font
    /// ([`Outcome::GlyphNotFound`]) or the first glyph that would cross the
    /// bottom edge ([`Outcome::OutOfBounds`]).
    pub fn draw_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        style: &TextStyle<'_>,
    ) -> Result<Outcome, IFACE::Error> {
        let line_height = u32::from(style.font.line_height()) + u32::from(style.y_padding);
        let right = u32::from(self.width) - 1;
        let bottom = u32::from(self.height) - 1;
        let (mut cursor_x, mut cursor_y) = (u32::from(x), u32::from(y));

        for code in text.chars() {
            match code {
                '\n' => {
                    cursor_x = u32::from(x);
                    cursor_y = cursor_y.saturating_add(line_height);
                }
                '\t' => cursor_x = cursor_x.saturating_add(4 * line_height),
                _ => {
                    let glyph = match style.font.glyph(code) {
                        Some(glyph) => glyph,
                        None => {
                            trace!("ili9341: no glyph for {}", code);
                            return Ok(Outcome::GlyphNotFound);
                        }
                    };
                    let advance = u32::from(glyph.width) + u32::from(style.x_padding);
                    let rise = u32::from(glyph.height) + u32::from(style.y_padding);

                    if cursor_y.saturating_add(rise) > bottom {
                        trace!("ili9341: text stopped at bottom edge");
                        return Ok(Outcome::OutOfBounds);
                    }
                    if cursor_x.saturating_add(advance) > right {
                        cursor_x = u32::from(x);
                        cursor_y += rise;
                        if cursor_y.saturating_add(rise) > bottom {
                            trace!("ili9341: text stopped at bottom edge");
                            return Ok(Outcome::OutOfBounds);
                        }
                    }

                    self.draw_glyph(
                        cursor_x as u16,
                        cursor_y as u16,
                        style.fg,
                        style.bg,
                        glyph,
                        style.opaque,
                    )?;
                    cursor_x += advance;
                }
            }
        }
        Ok(Outcome::Complete)
    }

    /// Draws `text` in `color` with a transparent background
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        color: u16,
        font: &Font<'_>,
    ) -> Result<Outcome, IFACE::Error> {
        self.draw_string(x, y, text, &TextStyle::new(font, color))
    }

    /// Draws `text` in `fg` on a solid `bg` background
    pub fn draw_text_with_bg(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: u16,
        bg: u16,
        font: &Font<'_>,
    ) -> Result<Outcome, IFACE::Error> {
        self.draw_string(x, y, text, &TextStyle::with_background(font, fg, bg))
    }

    /// Draws a single character at (x, y), without wrapping or clipping
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        code: char,
        style: &TextStyle<'_>,
    ) -> Result<Outcome, IFACE::Error> {
        match style.font.glyph(code) {
            Some(glyph) => {
                self.draw_glyph(x, y, style.fg, style.bg, glyph, style.opaque)?;
                Ok(Outcome::Complete)
            }
            None => Ok(Outcome::GlyphNotFound),
        }
    }
}
