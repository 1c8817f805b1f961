//! CLI entry point for the cap mosaic generator

use capmosaic::io::cli::{Cli, MosaicProcessor};
use clap::Parser;

fn main() -> capmosaic::Result<()> {
    let cli = Cli::parse();
    let mut processor = MosaicProcessor::new(cli);
    processor.process()
}
