//! Error taxonomy shared by the rendering modules.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Anything that can go wrong while rendering a symbol or a sheet.
#[derive(Debug, Error)]
pub enum Error {
    /// The input string was empty after trimming.
    #[error("nothing to encode: input is empty")]
    EmptyInput,

    /// `combine_blocks` was handed an empty list.
    #[error("no blocks to lay out")]
    EmptySheet,

    /// The QR library rejected the payload (typically: too long).
    #[error("QR encoding failed: {0}")]
    Qr(#[from] qrcode::types::QrError),

    /// Code 128 character set B rejected the payload.
    #[error("Code 128 encoding failed: {0}")]
    Code128(barcoders::error::Error),

    /// The bundled label font failed to parse.
    #[error("invalid label font: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
