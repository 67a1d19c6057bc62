//! cspace-e2e - browser-driven smoke tests for a CollectionSpace tenant
//!
//! Runs an ordered, dependency-gated set of UI test cases against a running
//! CollectionSpace instance through a WebDriver endpoint.

use clap::Parser;
use cspace_e2e::commands::Commands;
use cspace_e2e::{cli, common};

#[derive(Parser)]
#[command(name = "cspace-e2e", about = "CollectionSpace tenant smoke tests")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    common::logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
