use anyhow::Result;
use clap::Parser;
use tracing::debug;

use openclaw::args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries the rendered page
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("openclaw v{}", env!("CARGO_PKG_VERSION"));
    openclaw::run(cli)
}
