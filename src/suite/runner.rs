//! Suite execution with prerequisite gating
//!
//! Cases run strictly sequentially in the suite's precomputed order. A case
//! whose prerequisites are not all `Passed` is skipped without executing its
//! body; a skipped or failed prerequisite therefore skips every transitive
//! dependent. A failing case never aborts the run.

use std::collections::HashMap;

use colored::Colorize;
use tracing::debug;

use super::case::CaseOutcome;
use super::graph::Suite;
use super::report::{CaseResult, RunReport};

/// Executes a validated suite against one run environment
pub struct SuiteRunner<'s, C> {
    suite: &'s Suite<C>,
    verbose: bool,
}

impl<'s, C> SuiteRunner<'s, C> {
    pub fn new(suite: &'s Suite<C>) -> Self {
        Self {
            suite,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run every eligible case and collect the outcome table
    pub async fn run(&self, env: &C) -> RunReport {
        let mut outcomes: HashMap<&'static str, CaseOutcome> = HashMap::new();
        let mut results = Vec::with_capacity(self.suite.len());

        for case in self.suite.cases_in_order() {
            let unmet = case
                .prerequisites()
                .iter()
                .copied()
                .find(|p| outcomes.get(p) != Some(&CaseOutcome::Passed));

            if let Some(prereq) = unmet {
                outcomes.insert(case.name(), CaseOutcome::Skipped);
                println!(
                    "  {} {} {}",
                    "-".yellow(),
                    case.name(),
                    format!("(skipped: '{}' did not pass)", prereq).dimmed()
                );
                results.push(CaseResult {
                    name: case.name(),
                    outcome: CaseOutcome::Skipped,
                    error: None,
                });
                continue;
            }

            outcomes.insert(case.name(), CaseOutcome::Running);
            if self.verbose {
                println!("  {} {}", "▸".cyan(), case.name().dimmed());
            }
            debug!(case = case.name(), "running");

            match case.run(env).await {
                Ok(()) => {
                    outcomes.insert(case.name(), CaseOutcome::Passed);
                    println!("  {} {}", "✓".green(), case.name());
                    results.push(CaseResult {
                        name: case.name(),
                        outcome: CaseOutcome::Passed,
                        error: None,
                    });
                }
                Err(e) => {
                    outcomes.insert(case.name(), CaseOutcome::Failed);
                    println!("  {} {}: {}", "✗".red(), case.name(), e);
                    results.push(CaseResult {
                        name: case.name(),
                        outcome: CaseOutcome::Failed,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        RunReport::new(results)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::common::Error;
    use crate::suite::{SuiteBuilder, TestCase};

    type Log = RefCell<Vec<&'static str>>;

    fn outcome(report: &RunReport, name: &str) -> CaseOutcome {
        report
            .results()
            .iter()
            .find(|r| r.name == name)
            .unwrap()
            .outcome
    }

    #[tokio::test]
    async fn test_all_passing_chain() {
        let suite: Suite<Log> = SuiteBuilder::new()
            .case(TestCase::new("a", &[], |log: &Log| {
                Box::pin(async move {
                    log.borrow_mut().push("a");
                    Ok(())
                })
            }))
            .case(TestCase::new("b", &["a"], |log: &Log| {
                Box::pin(async move {
                    log.borrow_mut().push("b");
                    Ok(())
                })
            }))
            .build()
            .unwrap();

        let log = Log::default();
        let report = SuiteRunner::new(&suite).run(&log).await;

        assert!(report.is_success());
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        assert_eq!(outcome(&report, "a"), CaseOutcome::Passed);
        assert_eq!(outcome(&report, "b"), CaseOutcome::Passed);
    }

    #[tokio::test]
    async fn test_failed_prerequisite_transitively_skips() {
        // a passes; b fails; c needs b; d needs c. c and d must be skipped
        // and their bodies must never execute.
        let suite: Suite<Log> = SuiteBuilder::new()
            .case(TestCase::new("a", &[], |log: &Log| {
                Box::pin(async move {
                    log.borrow_mut().push("a");
                    Ok(())
                })
            }))
            .case(TestCase::new("b", &["a"], |log: &Log| {
                Box::pin(async move {
                    log.borrow_mut().push("b");
                    Err(Error::Assertion("wrong title".into()))
                })
            }))
            .case(TestCase::new("c", &["b"], |log: &Log| {
                Box::pin(async move {
                    log.borrow_mut().push("c");
                    Ok(())
                })
            }))
            .case(TestCase::new("d", &["c"], |log: &Log| {
                Box::pin(async move {
                    log.borrow_mut().push("d");
                    Ok(())
                })
            }))
            .build()
            .unwrap();

        let log = Log::default();
        let report = SuiteRunner::new(&suite).run(&log).await;

        assert_eq!(*log.borrow(), vec!["a", "b"]);
        assert_eq!(outcome(&report, "b"), CaseOutcome::Failed);
        assert_eq!(outcome(&report, "c"), CaseOutcome::Skipped);
        assert_eq!(outcome(&report, "d"), CaseOutcome::Skipped);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped(), 2);
    }

    #[tokio::test]
    async fn test_failure_is_isolated_per_case() {
        // b fails but c has no edge to it, so c still runs.
        let suite: Suite<Log> = SuiteBuilder::new()
            .case(TestCase::new("b", &[], |log: &Log| {
                Box::pin(async move {
                    log.borrow_mut().push("b");
                    Err(Error::ElementNotFound("class 'csc-save'".into()))
                })
            }))
            .case(TestCase::new("c", &[], |log: &Log| {
                Box::pin(async move {
                    log.borrow_mut().push("c");
                    Ok(())
                })
            }))
            .build()
            .unwrap();

        let log = Log::default();
        let report = SuiteRunner::new(&suite).run(&log).await;

        assert_eq!(*log.borrow(), vec!["b", "c"]);
        assert_eq!(outcome(&report, "b"), CaseOutcome::Failed);
        assert_eq!(outcome(&report, "c"), CaseOutcome::Passed);
    }

    #[tokio::test]
    async fn test_failure_message_recorded() {
        let suite: Suite<Log> = SuiteBuilder::new()
            .case(TestCase::new("a", &[], |_: &Log| {
                Box::pin(async { Err(Error::Assertion("login failed: 'bad password'".into())) })
            }))
            .build()
            .unwrap();

        let log = Log::default();
        let report = SuiteRunner::new(&suite).run(&log).await;

        let result = &report.results()[0];
        assert_eq!(result.outcome, CaseOutcome::Failed);
        assert!(result.error.as_deref().unwrap().contains("bad password"));
    }
}
