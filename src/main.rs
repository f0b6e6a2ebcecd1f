//! CLI entry point for board layout generation

use clap::Parser;
use indicatif::MultiProgress;
use pigboard::io::cli::{Cli, FileProcessor};
use pigboard::io::progress::ProgressLogger;

fn main() -> pigboard::Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.quiet { "warn" } else { "info" };
    let logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
            .build();
    let max_level = logger.filter();

    // Log lines and progress bars share one terminal
    let multi_progress = MultiProgress::new();
    if log::set_boxed_logger(Box::new(ProgressLogger::new(logger, multi_progress.clone()))).is_ok() {
        log::set_max_level(max_level);
    }

    let mut processor = FileProcessor::with_progress(cli, multi_progress);
    processor.process()
}
