//! CLI entry point for reconstructing shredded images

use clap::Parser;
use unshred::io::cli::{Cli, FileProcessor};
use unshred::io::logging::init_logging;

fn main() -> unshred::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
