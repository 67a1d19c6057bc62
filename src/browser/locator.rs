//! Declarative element locators
//!
//! A `Locator` describes how to find one element; it is converted to the
//! driver's `By` only at the WebDriver boundary so failure messages can show
//! the original selector.

use std::fmt;

use thirtyfour::By;

/// A declarative reference to a UI element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Match by CSS class name
    ClassName(String),
    /// Match by element id
    Id(String),
    /// Match by CSS selector
    Css(String),
    /// Match by tag name
    Tag(String),
}

impl Locator {
    pub fn class(name: impl Into<String>) -> Self {
        Self::ClassName(name.into())
    }

    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Self::Tag(name.into())
    }

    pub(crate) fn to_by(&self) -> By {
        match self {
            Self::ClassName(name) => By::ClassName(name.clone()),
            Self::Id(id) => By::Id(id.clone()),
            Self::Css(selector) => By::Css(selector.clone()),
            Self::Tag(name) => By::Tag(name.clone()),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassName(name) => write!(f, "class '{}'", name),
            Self::Id(id) => write!(f, "id '{}'", id),
            Self::Css(selector) => write!(f, "css '{}'", selector),
            Self::Tag(name) => write!(f, "tag '{}'", name),
        }
    }
}
