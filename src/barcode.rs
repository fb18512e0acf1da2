//! Code 128 blocks with text labels.
//!
//! Encoding is delegated to the [`barcoders`] crate; this module rasterizes
//! the module pattern into bars and composes a padded block with the input
//! text centered underneath.

use barcoders::sym::code128::Code128;
use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{Error, Result};
use crate::label;

/*---- Layout constants ----*/

/// Left/right padding around each block; doubles as the quiet zone.
pub const PADDING_X: u32 = 20;

/// Padding above the bars and below the label.
pub const PADDING_TOP: u32 = 20;

/// Gap between the bars and the label.
pub const LABEL_GAP: u32 = 8;

/// Bar height, in pixels.
const BAR_HEIGHT: u32 = 60;

/// Width of one barcode module, in pixels.
const MODULE_WIDTH: u32 = 2;

/// Block background.
pub const BG: Rgb<u8> = Rgb([255, 255, 255]);

/// Bar and label color.
pub const FG: Rgb<u8> = Rgb([0, 0, 0]);

/*---- Rendering ----*/

// Ɓ selects character set B, which covers all printable ASCII.
fn encode(data: &str) -> Result<Vec<u8>> {
    let code = Code128::new(format!("Ɓ{data}")).map_err(Error::Code128)?;
    Ok(code.encode())
}

// One entry per module, 1 = bar. Bars are MODULE_WIDTH pixels wide.
fn render_bars(modules: &[u8]) -> RgbImage {
    let width = modules.len() as u32 * MODULE_WIDTH;
    let mut img = ImageBuffer::from_pixel(width, BAR_HEIGHT, BG);

    for (i, module) in modules.iter().enumerate() {
        if *module == 1 {
            let x0 = i as u32 * MODULE_WIDTH;
            for x in x0..x0 + MODULE_WIDTH {
                for y in 0..BAR_HEIGHT {
                    img.put_pixel(x, y, FG);
                }
            }
        }
    }

    img
}

/// Renders `data` as a Code 128 barcode with its text label underneath as
/// one block.
///
/// The block is sized to the wider of the bars and the label, plus
/// [`PADDING_X`] on each side, and both are horizontally centered on a white
/// background.
///
/// # Errors
///
/// Returns an error if `data` is empty or contains characters outside
/// Code 128 character set B.
///
/// # Example
///
/// ```rust
/// use codesheet::barcode::make_barcode_image;
///
/// let block = make_barcode_image("INV-0001").unwrap();
/// assert!(block.width() > block.height());
/// ```
pub fn make_barcode_image(data: &str) -> Result<RgbImage> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }

    let bars = render_bars(&encode(data)?);

    let font = label::font()?;
    let (label_w, label_h) = label::size(&font, data);

    let block_w = bars.width().max(label_w) + 2 * PADDING_X;
    let block_h = PADDING_TOP + bars.height() + LABEL_GAP + label_h + PADDING_TOP;

    let mut block = ImageBuffer::from_pixel(block_w, block_h, BG);

    // center the bars
    let x_bar = (block_w - bars.width()) / 2;
    let y_bar = PADDING_TOP;
    image::imageops::overlay(&mut block, &bars, x_bar.into(), y_bar.into());

    // center the label
    let x_lbl = (block_w - label_w) / 2;
    let y_lbl = y_bar + bars.height() + LABEL_GAP;
    label::draw(&mut block, &font, data, x_lbl as i32, y_lbl as i32, FG);

    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bars_synthetic_pattern() {
        let img = render_bars(&[1, 0, 1, 1]);

        assert_eq!(img.dimensions(), (4 * MODULE_WIDTH, BAR_HEIGHT));
        assert_eq!(*img.get_pixel(0, 0), FG);
        assert_eq!(*img.get_pixel(MODULE_WIDTH, 0), BG);
        assert_eq!(*img.get_pixel(2 * MODULE_WIDTH, BAR_HEIGHT - 1), FG);
        assert_eq!(*img.get_pixel(3 * MODULE_WIDTH, BAR_HEIGHT - 1), FG);
    }

    #[test]
    fn test_block_dimensions() {
        let block = make_barcode_image("ABC-123").unwrap();

        let font = label::font().unwrap();
        let (label_w, label_h) = label::size(&font, "ABC-123");

        assert_eq!(
            block.height(),
            PADDING_TOP + BAR_HEIGHT + LABEL_GAP + label_h + PADDING_TOP
        );
        assert!(block.width() >= label_w + 2 * PADDING_X);
    }

    #[test]
    fn test_block_padding_is_background() {
        let block = make_barcode_image("ABC-123").unwrap();

        assert_eq!(*block.get_pixel(0, 0), BG);
        assert_eq!(*block.get_pixel(block.width() - 1, block.height() - 1), BG);
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(matches!(make_barcode_image(""), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_rejects_characters_outside_set_b() {
        assert!(matches!(
            make_barcode_image("héllo"),
            Err(Error::Code128(_))
        ));
    }
}
