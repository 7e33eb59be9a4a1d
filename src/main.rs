//! CLI entry point for the brick wall planner

use brickbond::io::cli::{Cli, WallProcessor};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> brickbond::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_directive())),
        )
        .with_target(false)
        .without_time()
        .init();

    let mut processor = WallProcessor::new(cli);
    processor.process().inspect_err(|err| {
        if err.is_input_error() {
            error!("Input error: {err}");
        } else {
            error!("Internal error: {err}");
        }
    })
}
