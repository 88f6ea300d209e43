//! CLI entry point for grid masking with GeoJSON boundaries

use clap::Parser;
use gridmask::io::cli::{Cli, FileProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> gridmask::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.quiet { "warn" } else { cli.log_level.as_str() })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
