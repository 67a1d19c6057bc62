//! Browser automation boundary
//!
//! Wraps the WebDriver client behind the small set of primitives the test
//! cases need. Element absence is data here: the `locate_optional` forms
//! return `Option` instead of surfacing a driver error.

mod locator;
mod session;

pub use locator::Locator;
pub use session::Session;
