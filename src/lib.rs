//! cspace-e2e - browser-driven smoke tests for a CollectionSpace tenant
//!
//! This library drives a real browser through a WebDriver endpoint against a
//! running CollectionSpace instance and checks tenant-specific UI
//! customizations and record save behavior.

pub mod browser;
pub mod cli;
pub mod commands;
pub mod common;
pub mod suite;
pub mod ucjeps;

// Re-export commonly used types for tests
pub use common::{Config, Error, Result};
pub use suite::{CaseOutcome, Suite, SuiteBuilder, SuiteRunner};
