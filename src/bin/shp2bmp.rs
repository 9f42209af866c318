extern crate ldtshp2bmp;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// LEGO Desktop Toy SHP to BMP converter
#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    /// Input palette (JASC-PAL)
    pal: PathBuf,
    /// Input SHP image
    shp: PathBuf,
    /// Output BMP file
    bmp: PathBuf,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    ldtshp2bmp::convert(&args.pal, &args.shp, &args.bmp)
        .with_context(|| format!("unable to convert {} to {}", args.shp.display(), args.bmp.display()))
}
