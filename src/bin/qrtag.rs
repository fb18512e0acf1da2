//! Generate a QR code image from a URL.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use codesheet::qr::{self, EccLevel};

#[derive(Parser, Debug)]
#[command(name = "qrtag", about = "Generate a QR code image from a URL", version)]
struct Args {
    /// The URL or text to encode. Prompted for on stdin when omitted.
    text: Option<String>,

    /// Output path; a .svg extension writes SVG instead of PNG.
    #[arg(short, long, default_value = "url_qr.png")]
    output: PathBuf,

    /// Error correction level.
    #[arg(long, value_enum, default_value_t = EccLevel::Medium)]
    ecc: EccLevel,

    /// Also print the QR code to the terminal.
    #[arg(short, long)]
    terminal: bool,
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let url = match args.text {
        Some(text) => text.trim().to_string(),
        None => prompt("Enter a URL to generate QR code: ")?,
    };
    anyhow::ensure!(!url.is_empty(), "please provide a URL");

    let code = qr::encode(&url, args.ecc).context("failed to generate QR code")?;
    if args.terminal {
        qr::print_qr(&code);
    }
    qr::save(&code, &args.output)
        .with_context(|| format!("failed to write QR code to {}", args.output.display()))?;
    println!("QR code saved as {}", args.output.display());

    Ok(())
}
