use std::io;

use anyhow::Result;
use clap::Parser;
use hopcount::cli::{run, Args};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}
