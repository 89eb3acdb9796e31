//! `storefront` - render the storefront pages to static HTML.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use storefront::cli::{Cli, run};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries rendered pages and listings
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("Starting storefront v{}", env!("CARGO_PKG_VERSION"));

    let mut stdout = std::io::stdout().lock();
    run(cli.command, &mut stdout)
}
