//! Expectation helpers
//!
//! Comparisons between an observed UI value and an expected literal. A
//! mismatch comes back as an `Error::Assertion` value; case bodies propagate
//! it with `?` so the current case fails without aborting the run.

use crate::common::{Error, Result};

/// The observed value must equal the expected literal
pub fn expect_eq(what: &str, actual: &str, expected: &str) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::expectation(what, expected, actual))
    }
}

/// The observed value must contain the expected substring
pub fn expect_contains(what: &str, haystack: &str, needle: &str) -> Result<()> {
    if haystack.contains(needle) {
        Ok(())
    } else {
        Err(Error::Assertion(format!(
            "{}: expected text containing '{}', got '{}'",
            what, needle, haystack
        )))
    }
}

/// An optional lookup must have found nothing
pub fn expect_absent<T>(what: &str, found: Option<T>) -> Result<()> {
    match found {
        None => Ok(()),
        Some(_) => Err(Error::Assertion(format!(
            "{}: expected no match, but one was found",
            what
        ))),
    }
}

/// An optional value must be present; returns the value
pub fn expect_present<T>(what: &str, found: Option<T>) -> Result<T> {
    found.ok_or_else(|| Error::Assertion(format!("{}: expected a value, got none", what)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_eq() {
        assert!(expect_eq("title", "a", "a").is_ok());
        let err = expect_eq("title", "a", "b").unwrap_err();
        assert!(err.to_string().contains("expected 'b', got 'a'"));
    }

    #[test]
    fn test_expect_contains() {
        assert!(expect_contains("message", "saved successfully", "success").is_ok());
        assert!(expect_contains("message", "save failed", "success").is_err());
    }

    #[test]
    fn test_expect_absent() {
        assert!(expect_absent::<()>("button", None).is_ok());
        assert!(expect_absent("button", Some(())).is_err());
    }

    #[test]
    fn test_expect_present() {
        assert_eq!(expect_present("attr", Some("x")).unwrap(), "x");
        assert!(expect_present::<&str>("attr", None).is_err());
    }
}
