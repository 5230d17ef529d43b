//! CLI entry point for painting stroke images with autotiling brushes

use clap::Parser;
use fringetile::io::cli::{Cli, FileProcessor};
use fringetile::io::logging::init_logging;

fn main() -> fringetile::Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(&cli.log_level)?;
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
