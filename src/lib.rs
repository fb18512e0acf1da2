//! # codesheet
//!
//! A Rust library for rendering QR codes and labelled Code 128 barcode sheets
//! as images.
//!
//! `codesheet` delegates symbol encoding to the [`qrcode`] and [`barcoders`]
//! crates and concentrates on what comes after: rasterizing the module
//! patterns, drawing text labels, and laying blocks out on a printable sheet.
//! It backs two small command-line tools, `qrtag` and `barsheet`, but every
//! step is usable as a library function.
//!
//! ## Features
//!
//! - Render a QR code as a PNG, an SVG string, or ASCII art on the terminal.
//! - Render a Code 128 barcode with its text centered underneath as one block.
//! - Stack any number of blocks vertically into a single sheet image.
//! - Safe Rust with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! codesheet = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Render a barcode sheet for two labels:
//!
//! ```rust
//! use codesheet::{barcode, sheet};
//!
//! fn main() -> codesheet::Result<()> {
//!     let blocks = vec![
//!         barcode::make_barcode_image("INV-0001")?,
//!         barcode::make_barcode_image("INV-0002")?,
//!     ];
//!     let sheet = sheet::combine_blocks(&blocks)?;
//!     sheet.save("barcodes_sheet.png")?;
//!     Ok(())
//! }
//! ```
//!
//! Save a QR code for a URL:
//!
//! ```rust,no_run
//! use codesheet::qr;
//!
//! fn main() -> codesheet::Result<()> {
//!     qr::create_qr("https://example.com", "url_qr.png", qr::EccLevel::Medium)
//! }
//! ```
//!
//! ## Modules
//!
//! - [`qr`]: QR code rasterization and output formats.
//! - [`barcode`]: Code 128 blocks with text labels.
//! - [`sheet`]: vertical composition of rendered blocks.
//! - [`label`]: the bundled label font and text drawing.

pub mod barcode;
pub mod error;
pub mod label;
pub mod qr;
pub mod sheet;

pub use error::{Error, Result};
