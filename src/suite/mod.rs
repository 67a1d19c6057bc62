//! Dependency-gated test suite runner
//!
//! A suite is a static registry of named test cases with prerequisite edges.
//! Validation (duplicate names, unknown prerequisites, cycles) happens when
//! the suite is built; execution walks a topological order and skips any case
//! whose prerequisites did not pass.

mod case;
mod expect;
mod graph;
mod report;
mod runner;

pub use case::{CaseBody, CaseOutcome, TestCase};
pub use expect::{expect_absent, expect_contains, expect_eq, expect_present};
pub use graph::{Suite, SuiteBuilder};
pub use report::{CaseResult, RunReport};
pub use runner::SuiteRunner;
