//! RGB565 colour helpers.
//!
//! Colours are plain `u16` words: 5 bits red, 6 bits green, 5 bits blue.

/// Packs 8-bit channels into an RGB565 word, dropping the low bits
pub const fn rgb(r: u8, g: u8, b: u8) -> u16 {
    (((r as u16) >> 3) << 11) | (((g as u16) >> 2) << 5) | ((b as u16) >> 3)
}

/// Packs 8-bit channels for panels wired in BGR order
pub const fn bgr(r: u8, g: u8, b: u8) -> u16 {
    (((b as u16) >> 3) << 11) | (((g as u16) >> 2) << 5) | ((r as u16) >> 3)
}

pub const BLACK: u16 = rgb(0, 0, 0);
pub const NAVY: u16 = rgb(0, 0, 123);
pub const DARKGREEN: u16 = rgb(0, 125, 0);
pub const DARKCYAN: u16 = rgb(0, 125, 123);
pub const MAROON: u16 = rgb(123, 0, 0);
pub const PURPLE: u16 = rgb(123, 0, 123);
pub const OLIVE: u16 = rgb(123, 125, 0);
pub const LIGHTGREY: u16 = rgb(198, 195, 198);
pub const DARKGREY: u16 = rgb(123, 125, 123);
pub const BLUE: u16 = rgb(0, 0, 255);
pub const GREEN: u16 = rgb(0, 255, 0);
pub const CYAN: u16 = rgb(0, 255, 255);
pub const RED: u16 = rgb(255, 0, 0);
pub const MAGENTA: u16 = rgb(255, 0, 255);
pub const YELLOW: u16 = rgb(255, 255, 0);
pub const WHITE: u16 = rgb(255, 255, 255);
pub const ORANGE: u16 = rgb(255, 165, 0);
pub const GREENYELLOW: u16 = rgb(173, 255, 41);
pub const PINK: u16 = rgb(255, 130, 198);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_rgb565_words() {
        assert_eq!(BLACK, 0x0000);
        assert_eq!(NAVY, 0x000f);
        assert_eq!(DARKGREEN, 0x03e0);
        assert_eq!(LIGHTGREY, 0xc618);
        assert_eq!(RED, 0xf800);
        assert_eq!(ORANGE, 0xfd20);
        assert_eq!(GREENYELLOW, 0xafe5);
        assert_eq!(PINK, 0xfc18);
        assert_eq!(WHITE, 0xffff);
    }

    #[test]
    fn bgr_swaps_red_and_blue() {
        assert_eq!(bgr(255, 0, 0), rgb(0, 0, 255));
        assert_eq!(bgr(0, 255, 0), GREEN);
    }
}
