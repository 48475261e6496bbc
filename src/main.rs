// Entrypoint for the CLI application.
// - Keeps `main` small: init logging, parse flags, hand off to `cli::run`.
// - Returns `anyhow::Result` so any error prints once and exits non-zero.

use clap::Parser;
use link_cli::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Silent by default; RUST_LOG=debug turns on request/config tracing.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli::run(cli)
}
