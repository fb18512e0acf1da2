//! Vertical composition of rendered blocks.

use image::{imageops, ImageBuffer, RgbImage};

use crate::barcode::BG;
use crate::error::{Error, Result};

/// Vertical space between stacked blocks, in pixels.
pub const SPACING: u32 = 20;

/// Stacks blocks vertically into one sheet image.
///
/// The sheet is as wide as the widest block and as tall as all blocks plus
/// [`SPACING`] between consecutive ones; each block is horizontally centered
/// on a white background.
///
/// # Errors
///
/// Returns [`Error::EmptySheet`] if `blocks` is empty.
pub fn combine_blocks(blocks: &[RgbImage]) -> Result<RgbImage> {
    let max_w = blocks.iter().map(|img| img.width()).max().ok_or(Error::EmptySheet)?;
    let total_h: u32 =
        blocks.iter().map(|img| img.height()).sum::<u32>() + SPACING * (blocks.len() as u32 - 1);

    let mut sheet = ImageBuffer::from_pixel(max_w, total_h, BG);
    let mut y = 0u32;
    for img in blocks {
        let x = (max_w - img.width()) / 2;
        imageops::overlay(&mut sheet, img, x.into(), y.into());
        y += img.height() + SPACING;
    }

    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_empty_list_rejected() {
        assert!(matches!(combine_blocks(&[]), Err(Error::EmptySheet)));
    }

    #[test]
    fn test_sheet_dimensions() {
        let blocks = vec![
            RgbImage::from_pixel(100, 40, BG),
            RgbImage::from_pixel(60, 30, BG),
        ];
        let sheet = combine_blocks(&blocks).unwrap();

        assert_eq!(sheet.dimensions(), (100, 40 + SPACING + 30));
    }

    #[test]
    fn test_narrow_block_is_centered() {
        let black = Rgb([0u8, 0, 0]);
        let blocks = vec![
            RgbImage::from_pixel(100, 10, BG),
            RgbImage::from_pixel(60, 10, black),
        ];
        let sheet = combine_blocks(&blocks).unwrap();

        let row = 10 + SPACING + 5;
        assert_eq!(*sheet.get_pixel(0, row), BG);
        assert_eq!(*sheet.get_pixel(20, row), black);
        assert_eq!(*sheet.get_pixel(99, row), BG);
        assert_eq!(*sheet.get_pixel(79, row), black);
    }

    #[test]
    fn test_single_block_has_no_trailing_gap() {
        let blocks = vec![RgbImage::from_pixel(50, 25, BG)];
        let sheet = combine_blocks(&blocks).unwrap();

        assert_eq!(sheet.dimensions(), (50, 25));
    }
}
