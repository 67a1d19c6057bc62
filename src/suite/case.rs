//! Test case definition and outcome states

use std::fmt;

use futures_util::future::LocalBoxFuture;

use crate::common::Result;

/// Body of a test case: borrows the run environment, performs browser
/// actions, and returns the first failed expectation or action error.
///
/// Bodies are plain function pointers because the suite registry is static;
/// anything run-specific comes in through the environment reference.
pub type CaseBody<C> = fn(&C) -> LocalBoxFuture<'_, Result<()>>;

/// Outcome of a test case within one run
///
/// `Pending → Skipped`, or `Pending → Running → {Passed, Failed}`.
/// Terminal states are final for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOutcome {
    Pending,
    Running,
    Skipped,
    Passed,
    Failed,
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Skipped => "skipped",
            Self::Passed => "passed",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// One named, independently outcome-tracked unit of browser interactions
/// plus expectations
#[derive(Debug)]
pub struct TestCase<C> {
    name: &'static str,
    prerequisites: &'static [&'static str],
    body: CaseBody<C>,
}

impl<C> TestCase<C> {
    pub fn new(
        name: &'static str,
        prerequisites: &'static [&'static str],
        body: CaseBody<C>,
    ) -> Self {
        Self {
            name,
            prerequisites,
            body,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Cases that must have passed before this one may run
    pub fn prerequisites(&self) -> &'static [&'static str] {
        self.prerequisites
    }

    /// Execute the case body against the run environment
    pub async fn run(&self, env: &C) -> Result<()> {
        (self.body)(env).await
    }
}
