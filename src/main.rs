//! CLI entry point for transforming PNG images as pixel grids

use clap::Parser;
use gridshape::io::cli::{Cli, FileProcessor};

fn main() -> gridshape::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
