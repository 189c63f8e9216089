//! Longpath - approximate longest simple path search
//!
//! A batch tool that reads an unweighted undirected graph from an edge list
//! and emits one long simple path found by a greedy BFS-guided heuristic.

use anyhow::Result;
use clap::Parser;
use longpath::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging; RUST_LOG overrides the --log-level flag
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}
