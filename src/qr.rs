//! QR code rasterization and output formats.
//!
//! Encoding is delegated to the [`qrcode`] crate; this module turns the
//! resulting module grid into a grayscale image, an SVG string, or ASCII art,
//! always with a quiet border around the symbol.

use std::fs;
use std::path::Path;

use image::{GrayImage, ImageBuffer, Luma};
use qrcode::{Color, EcLevel, QrCode};

use crate::error::{Error, Result};

/// Quiet border around the symbol, in modules.
const BORDER: i32 = 4;

/// Rendered size of one module, in pixels.
const MODULE_SIZE: u32 = 8;

/// Error correction level of a QR code symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum EccLevel {
    /// Tolerates about 7% erroneous codewords.
    Low,
    /// Tolerates about 15% erroneous codewords.
    #[default]
    Medium,
    /// Tolerates about 25% erroneous codewords.
    Quartile,
    /// Tolerates about 30% erroneous codewords.
    High,
}

impl From<EccLevel> for EcLevel {
    fn from(level: EccLevel) -> Self {
        match level {
            EccLevel::Low => EcLevel::L,
            EccLevel::Medium => EcLevel::M,
            EccLevel::Quartile => EcLevel::Q,
            EccLevel::High => EcLevel::H,
        }
    }
}

/// Encodes `content` into a QR code symbol.
///
/// The smallest version that fits the payload at the requested error
/// correction level is selected. Empty input is rejected before the encoder
/// sees it.
pub fn encode(content: &str, ecc: EccLevel) -> Result<QrCode> {
    if content.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(QrCode::with_error_correction_level(
        content.as_bytes(),
        ecc.into(),
    )?)
}

// The symbol is dark-on-light; everything outside the grid is light.
fn module_at(qr: &QrCode, x: i32, y: i32) -> bool {
    let size = qr.width() as i32;
    if x < 0 || y < 0 || x >= size || y >= size {
        return false;
    }
    qr[(x as usize, y as usize)] == Color::Dark
}

// Returns a string of SVG code for an image depicting
// the given QR Code, with the given number of border modules.
// The string always uses Unix newlines (\n), regardless of the platform.
pub fn to_svg_string(qr: &QrCode, border: i32) -> String {
    assert!(border >= 0, "Border must be non-negative");
    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    result += "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
    let dimension = qr.width() as i32 + border * 2;
    result += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {0} {0}\" stroke=\"none\">\n",
        dimension
    );
    result += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
    result += "\t<path d=\"";
    for y in 0..qr.width() as i32 {
        for x in 0..qr.width() as i32 {
            if module_at(qr, x, y) {
                if x != 0 || y != 0 {
                    result += " ";
                }
                result += &format!("M{},{}h1v1h-1z", x + border, y + border);
            }
        }
    }
    result += "\" fill=\"#000000\"/>\n";
    result += "</svg>\n";
    result
}

/// Prints the given QR code symbol to the console.
pub fn print_qr(qr: &QrCode) {
    let border: i32 = BORDER;
    for y in -border..qr.width() as i32 + border {
        for x in -border..qr.width() as i32 + border {
            let c: char = if module_at(qr, x, y) { '█' } else { ' ' };
            print!("{0}{0}", c);
        }
        println!();
    }
    println!();
}

/// Rasterizes a QR code symbol into a grayscale image buffer.
///
/// Each module becomes an 8x8 pixel square and the symbol is surrounded by a
/// 4-module quiet border, so the buffer is `(width + 8) * 8` pixels on each
/// side.
///
/// # Example
///
/// ```rust
/// use codesheet::qr;
///
/// let code = qr::encode("Hello, World!", qr::EccLevel::Low).unwrap();
/// let img = qr::to_image_buffer(&code);
/// assert_eq!(img.width(), img.height());
/// ```
pub fn to_image_buffer(qr: &QrCode) -> GrayImage {
    let size = (qr.width() as u32 + 2 * BORDER as u32) * MODULE_SIZE;
    let mut img = ImageBuffer::new(size, size);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let qr_x = (x / MODULE_SIZE) as i32 - BORDER;
        let qr_y = (y / MODULE_SIZE) as i32 - BORDER;
        *pixel = if module_at(qr, qr_x, qr_y) {
            Luma([0u8]) // Black
        } else {
            Luma([255u8]) // White
        };
    }

    img
}

/// Saves a QR code symbol to `path`, creating the parent directory if needed.
///
/// The output format follows the file extension: an `.svg` path gets the SVG
/// rendition, anything else is rasterized and written through the `image`
/// crate (PNG for the tools in this crate).
pub fn save(qr: &QrCode, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("svg") => {
            fs::write(path, to_svg_string(qr, BORDER))?;
        }
        _ => to_image_buffer(qr).save(path)?,
    }
    log::debug!("wrote QR code to {}", path.display());
    Ok(())
}

/// Generates a QR code for `content` and saves it to `path`.
///
/// # Arguments
///
/// * `content` - The content to encode into the QR code.
/// * `path` - Destination file; the extension selects PNG or SVG output.
/// * `ecc` - Error correction level.
///
/// # Example
///
/// ```rust,no_run
/// use codesheet::qr;
///
/// qr::create_qr("https://example.com", "out/url_qr.png", qr::EccLevel::Medium).unwrap();
/// ```
pub fn create_qr(content: &str, path: impl AsRef<Path>, ecc: EccLevel) -> Result<()> {
    let qr = encode(content, ecc)?;
    save(&qr, path.as_ref())
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_svg_string() {
        let qr = encode("HELLO WORLD", EccLevel::Low).unwrap();
        let svg = to_svg_string(&qr, 4);

        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(svg.contains("fill=\"#000000\""));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_image_buffer_dimensions() {
        // "HELLO WORLD" fits a version 1 symbol, which is 21 modules wide.
        let qr = encode("HELLO WORLD", EccLevel::Low).unwrap();
        let img = to_image_buffer(&qr);

        let expected = (21 + 2 * BORDER as u32) * MODULE_SIZE;
        assert_eq!(img.dimensions(), (expected, expected));
    }

    #[test]
    fn test_quiet_border_is_light() {
        let qr = encode("HELLO WORLD", EccLevel::Medium).unwrap();
        let img = to_image_buffer(&qr);

        assert_eq!(*img.get_pixel(0, 0), Luma([255u8]));
        assert_eq!(*img.get_pixel(img.width() - 1, img.height() - 1), Luma([255u8]));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(encode("", EccLevel::Medium), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_create_qr_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("url_qr.png");

        create_qr("https://example.com", &path, EccLevel::Medium).unwrap();

        let saved = image::open(&path).unwrap();
        assert_eq!(saved.width(), saved.height());
    }
}
