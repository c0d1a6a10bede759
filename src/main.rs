//! Tally - command-line task tracker

use anyhow::Result;
use clap::Parser;
use tally::cli::{self, Cli};
use tally::task::TaskList;

fn main() -> Result<()> {
    if std::env::var("TALLY_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("tally=debug")
            .init();
    }

    let cli = Cli::parse();

    // The tracker is in-memory only: every run starts from an empty list.
    let mut tasks = TaskList::new();
    cli::execute(cli, &mut tasks)
}
