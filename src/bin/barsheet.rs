//! Generate a sheet of stacked Code 128 barcodes with text labels.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use image::RgbImage;

use codesheet::{barcode, sheet};

#[derive(Parser, Debug)]
#[command(
    name = "barsheet",
    about = "Generate stacked Code 128 barcodes with text labels",
    version
)]
struct Args {
    /// Texts to encode, one barcode each. Prompted for on stdin when omitted.
    items: Vec<String>,

    /// Output PNG path.
    #[arg(short, long, default_value = "barcodes_sheet.png")]
    output: PathBuf,
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

// A failed item is logged and skipped; the sheet is built from the rest.
fn push_block(blocks: &mut Vec<RgbImage>, data: &str) {
    match barcode::make_barcode_image(data) {
        Ok(block) => blocks.push(block),
        Err(err) => log::warn!("failed to create barcode for {data:?}: {err}"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut blocks = Vec::new();
    if args.items.is_empty() {
        println!("Multi-barcode sheet (type 'done' to finish)\n");
        loop {
            let data = prompt("Enter text for barcode (or 'done' to stop): ")?;
            if data.is_empty() || data.eq_ignore_ascii_case("done") {
                break;
            }
            push_block(&mut blocks, &data);
        }
    } else {
        for item in &args.items {
            push_block(&mut blocks, item);
        }
    }

    if blocks.is_empty() {
        log::warn!("nothing to encode, no file created");
        return Ok(());
    }

    let count = blocks.len();
    let sheet = sheet::combine_blocks(&blocks)?;
    sheet
        .save(&args.output)
        .with_context(|| format!("failed to write sheet to {}", args.output.display()))?;
    println!(
        "Saved {count} barcode{} to {}",
        if count == 1 { "" } else { "s" },
        args.output.display()
    );

    Ok(())
}
