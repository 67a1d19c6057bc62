//! CLI command definitions
//!
//! Defines the clap commands for the suite runner.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the tenant test suite against a live instance
    Run {
        /// Path to a TOML configuration file (defaults are used if omitted)
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Print every action as it executes
        #[arg(long, short)]
        verbose: bool,
    },

    /// List the test cases in execution order without running them
    List,
}
