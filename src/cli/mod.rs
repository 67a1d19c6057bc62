//! CLI command handling
//!
//! Loads configuration, opens the browser session, and runs the suite.

use colored::Colorize;

use crate::browser::Session;
use crate::commands::Commands;
use crate::common::{Config, Error, Result};
use crate::suite::SuiteRunner;
use crate::ucjeps::{self, RunEnv};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run { config, verbose } => {
            let config = Config::load(config.as_deref())?;
            let suite = ucjeps::suite()?;

            println!(
                "\n{} {} {}",
                "Running suite:".blue().bold(),
                config.tenant.white().bold(),
                format!("({})", config.base_url()).dimmed()
            );

            let session = Session::open(&config).await?;
            let env = RunEnv { session, config };

            let report = SuiteRunner::new(&suite).verbose(verbose).run(&env).await;

            // The session is closed whatever the outcome was.
            let RunEnv { session, .. } = env;
            session.close().await?;

            report.print_summary();

            if report.is_success() {
                Ok(())
            } else {
                Err(Error::SuiteFailed {
                    failed: report.failed(),
                    total: report.total(),
                })
            }
        }

        Commands::List => {
            let suite = ucjeps::suite()?;

            println!("Execution order:");
            for case in suite.cases_in_order() {
                if case.prerequisites().is_empty() {
                    println!("  {}", case.name());
                } else {
                    println!(
                        "  {} {}",
                        case.name(),
                        format!("(needs {})", case.prerequisites().join(", ")).dimmed()
                    );
                }
            }

            Ok(())
        }
    }
}
