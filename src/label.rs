//! The bundled label font and text drawing.
//!
//! Raster text needs a real font file, so a DejaVu Sans face ships with the
//! crate and is embedded at compile time.

use ab_glyph::{FontRef, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::error::Result;

static FONT_BYTES: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

/// Font size for label text, in pixels.
pub const LABEL_SCALE: f32 = 20.0;

/// Returns the bundled label font.
pub fn font() -> Result<FontRef<'static>> {
    Ok(FontRef::try_from_slice(FONT_BYTES)?)
}

/// Measures `text` at the label scale, returning `(width, height)` in pixels.
pub fn size(font: &FontRef<'_>, text: &str) -> (u32, u32) {
    text_size(PxScale::from(LABEL_SCALE), font, text)
}

/// Draws `text` onto `img` with its top-left corner at `(x, y)`.
pub fn draw(img: &mut RgbImage, font: &FontRef<'_>, text: &str, x: i32, y: i32, color: Rgb<u8>) {
    draw_text_mut(img, color, x, y, PxScale::from(LABEL_SCALE), font, text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_parses() {
        assert!(font().is_ok());
    }

    #[test]
    fn test_size_grows_with_text() {
        let font = font().unwrap();
        let (short_w, short_h) = size(&font, "A");
        let (long_w, long_h) = size(&font, "A MUCH LONGER LABEL");

        assert!(short_w > 0 && short_h > 0);
        assert!(long_w > short_w);
        assert_eq!(long_h, short_h);
    }
}
