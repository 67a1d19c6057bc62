//! Error types for the suite runner
//!
//! An element that is allowed to be absent is never an error: those lookups
//! return `Option` instead. Everything here marks the current test case as
//! failed (or aborts the run for definition/configuration problems).

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the suite runner
#[derive(Error, Debug)]
pub enum Error {
    // === Browser/Session Errors ===
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    // === Expectation Errors ===
    #[error("Assertion failed: {0}")]
    Assertion(String),

    // === Suite Definition Errors ===
    #[error("Suite definition error: {0}")]
    SuiteDefinition(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Run Outcome ===
    #[error("{failed} of {total} test case(s) failed")]
    SuiteFailed { failed: usize, total: usize },
}

impl Error {
    /// Create an assertion error for an observed/expected mismatch
    pub fn expectation(what: &str, expected: &str, actual: &str) -> Self {
        Self::Assertion(format!(
            "{}: expected '{}', got '{}'",
            what, expected, actual
        ))
    }
}
