//! Run report: the per-case outcome table after a suite run

use colored::Colorize;

use super::case::CaseOutcome;

/// Recorded outcome of one test case
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub name: &'static str,
    pub outcome: CaseOutcome,
    /// Failure message, present iff the outcome is `Failed`
    pub error: Option<String>,
}

/// Outcomes of a full suite run, in execution order
#[derive(Debug, Clone)]
pub struct RunReport {
    results: Vec<CaseResult>,
}

impl RunReport {
    pub(crate) fn new(results: Vec<CaseResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[CaseResult] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.count(CaseOutcome::Passed)
    }

    pub fn failed(&self) -> usize {
        self.count(CaseOutcome::Failed)
    }

    pub fn skipped(&self) -> usize {
        self.count(CaseOutcome::Skipped)
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, outcome: CaseOutcome) -> usize {
        self.results.iter().filter(|r| r.outcome == outcome).count()
    }

    /// Print the failure details and the one-line tally
    pub fn print_summary(&self) {
        for result in &self.results {
            if let Some(error) = &result.error {
                println!("\n{} {}: {}", "✗".red(), result.name.bold(), error);
            }
        }

        let tally = format!(
            "{} passed, {} failed, {} skipped",
            self.passed(),
            self.failed(),
            self.skipped()
        );

        if self.is_success() {
            println!("\n{} {}\n", "✓".green().bold(), tally.green().bold());
        } else {
            println!("\n{} {}\n", "✗".red().bold(), tally.red().bold());
        }
    }
}
